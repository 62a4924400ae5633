use std::{
    fmt::Write as FmtWrite,
    fs::File,
    io::{Read, Write},
    num::ParseIntError,
    path::Path,
};

use crate::error::Error;

/// Decode a hex string into a bytearray
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, ParseIntError> {
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16)).collect()
}

/// Encode a bytearray into a hex string
pub(crate) fn encode_hex(s: Vec<u8>) -> String {
    s.iter().fold(String::new(), |mut acc: String, b| {
        write!(acc, "{b:02x}").expect("unable to write");
        acc
    })
}

/// Prettify bytes into a human-readable format
pub(crate) fn prettify_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        let kb = bytes / 1024;
        format!("{kb} KB")
    } else if bytes < 1024 * 1024 * 1024 {
        let mb = bytes / (1024 * 1024);
        format!("{mb} MB")
    } else {
        let gb = bytes / (1024 * 1024 * 1024);
        format!("{gb} GB")
    }
}

/// Write contents to a file on the disc
/// If the parent directory does not exist, it will be created
pub(crate) fn write_file(path_str: &str, contents: &str) -> Result<(), Error> {
    let path = Path::new(path_str);

    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)?;
    } else {
        return Err(Error::IOError(std::io::Error::other("Unable to create directory")));
    }

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
/// Returns the contents as a string
pub(crate) fn read_file(path: &str) -> Result<String, Error> {
    let path = Path::new(path);
    let mut file = File::open(path).map_err(|e| Error::IOError(std::io::Error::other(e)))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory on the disc
/// Returns true if the operation was successful
pub(crate) fn delete_path(path: &str) -> bool {
    let path = Path::new(path);
    if path.is_dir() {
        std::fs::remove_dir_all(path).is_ok()
    } else {
        std::fs::remove_file(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::*;

    #[test]
    fn test_decode_hex_valid_hex() {
        let hex = "48656c6c6f20576f726c64"; // "Hello World" in hex
        let result = decode_hex(hex);
        assert_eq!(result, Ok(vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100]));
    }

    #[test]
    fn test_decode_hex_invalid_hex() {
        let hex = "48656c6c6f20576f726c4G"; // Invalid hex character 'G'
        let result = decode_hex(hex);
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_hex() {
        let bytes = vec![72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100];
        let result = encode_hex(bytes);
        assert_eq!(result, "48656c6c6f20576f726c64");
    }

    #[test]
    fn test_prettify_bytes_less_than_1_kb() {
        let bytes = 500;
        let result = prettify_bytes(bytes);
        assert_eq!(result, "500 B");
    }

    #[test]
    fn test_prettify_bytes_less_than_1_mb() {
        let bytes = 500_000;
        let result = prettify_bytes(bytes);
        assert_eq!(result, "488 KB");
    }

    #[test]
    fn test_write_and_read_file() {
        let path = "/tmp/slotmint_cache_test.txt";
        let contents = "Hello, World!";
        write_file(path, contents).expect("unable to write file");

        let result = read_file(path).expect("unable to read file");
        assert_eq!(result, contents);

        assert!(delete_path(path));
    }

    #[test]
    fn test_delete_path_missing_file() {
        let path = "/nonexistent/test_dir";
        let result = delete_path(path);
        assert!(!result);
    }
}
