pub mod analyse_page;
pub mod chat_page;
pub mod header;
pub mod report_page;
pub mod utils;
