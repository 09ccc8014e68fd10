pub mod app;
pub mod banner;
pub mod context;
pub mod monthview;
pub mod util;

pub use app::App;
pub use context::Context;
pub use monthview::MonthPane;
