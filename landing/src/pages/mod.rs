// Site views, one per PageId
mod about;
mod contact;
mod gallery;
mod home;
mod legal;
mod product_detail;
mod products;
mod sitemap;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use legal::{LegalPage, PrivacyPage};
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use sitemap::SitemapPage;
