pub mod dashboard;
pub mod heimdall_title;
pub mod navbar;
pub mod page;
pub mod session_controls;

pub use heimdall_title::HeimdallTitleButton;
pub use navbar::Navbar;
pub use page::Page;
pub use session_controls::SessionControls;
