pub mod app;
pub mod page;
pub mod routes;
pub mod static_files;

pub use app::*;
pub use page::*;
pub use routes::*;
pub use static_files::*;
