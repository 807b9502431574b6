pub mod books;
pub mod genres;

use folio_kernel::ModuleRegistry;

use crate::state::Stores;

/// Register all catalog modules. Genres come first: book seeding resolves
/// genre references during init.
pub fn register_all(registry: &mut ModuleRegistry, stores: &Stores) {
    registry.register(genres::create_module(stores));
    registry.register(books::create_module(stores));
}
