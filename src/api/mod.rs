pub mod export;
pub mod name;
pub mod upload;

pub use export::{__path_handle_export_bin, __path_handle_export_code};
pub use export::{handle_export_bin, handle_export_code, ExportQuery};
pub use name::{handle_name, NameResponse, __path_handle_name};
pub use upload::{handle_upload, UploadResponse, __path_handle_upload};
