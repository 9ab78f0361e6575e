pub mod app;
pub mod message;
pub mod view_form;

pub use app::App;
pub use message::Message;
