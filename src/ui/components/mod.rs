//! UI components for the Redraft application

pub mod compose_form;
pub mod notice_dialog;
pub mod reply_panel;

pub use compose_form::ComposeForm;
pub use notice_dialog::NoticeDialog;
pub use reply_panel::ReplyPanel;
