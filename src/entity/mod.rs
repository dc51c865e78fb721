pub mod artworks;
pub mod genres;
pub mod order_items;
pub mod orders;
pub mod reviews;
pub mod users;

pub use artworks::Entity as Artworks;
pub use genres::Entity as Genres;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
