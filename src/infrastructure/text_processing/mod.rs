mod composite_text_extractor;
mod pdf_adapter;
mod plain_text_adapter;

pub use composite_text_extractor::CompositeTextExtractor;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
