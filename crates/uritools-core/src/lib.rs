pub mod config;
pub mod logging;

pub mod dirs;
pub mod error;
pub mod file_io;
pub mod subpath;
pub mod temp;
pub mod text;
pub mod uri;

pub use error::{EncodingError, FileError, MalformedUri};
pub use file_io::{read_binary_file, write_binary_file};
pub use subpath::uri_to_subpath;
pub use temp::{unique_temp_file_path, unique_temp_file_path_in};
pub use text::{narrow_from_bytes, to_narrow, to_narrow_lossy, to_wide};
pub use uri::{
    file_uri_to_path, file_uri_to_path_native, is_file_uri, is_http_uri, path_to_file_uri,
    AuthorityStyle,
};
