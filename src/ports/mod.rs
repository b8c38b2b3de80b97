pub mod clipboard_writer;
pub mod generation_client;

pub use clipboard_writer::ClipboardWriter;
pub use generation_client::GenerationClient;
