//! `multipart/form-data` bodies for file-based activities

use ctct_domain::{CtctError, Result};
use uuid::Uuid;

const CRLF: &[u8] = b"\r\n";
const MAX_BOUNDARY_ATTEMPTS: usize = 8;

/// An encoded multipart body and the boundary separating its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multipart {
    pub body: Vec<u8>,
    pub boundary: String,
}

impl Multipart {
    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

/// Encode `fields` in order, followed by the file part.
///
/// The boundary is a random token regenerated until it occurs in neither
/// the file contents nor any field value.
///
/// # Errors
///
/// Returns [`CtctError::Encoding`] when a part name contains `"`, CR or LF,
/// or no collision-free boundary could be generated.
pub fn build_multipart(fields: &[(&str, &str)], file_field_name: &str, file_contents: &[u8]) -> Result<Multipart> {
    for name in fields.iter().map(|(name, _)| *name).chain(std::iter::once(file_field_name)) {
        validate_name(name)?;
    }

    let boundary = pick_boundary(fields, file_contents)?;

    let mut body = Vec::with_capacity(file_contents.len() + 256);
    for (name, value) in fields {
        write_part(&mut body, &boundary, name, value.as_bytes());
    }
    write_part(&mut body, &boundary, file_field_name, file_contents);
    body.extend_from_slice(b"--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(b"--");
    body.extend_from_slice(CRLF);

    Ok(Multipart { body, boundary })
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(['"', '\r', '\n']) {
        return Err(CtctError::Encoding(format!("part name {name:?} cannot be used in a Content-Disposition header")));
    }
    Ok(())
}

fn pick_boundary(fields: &[(&str, &str)], file_contents: &[u8]) -> Result<String> {
    for _ in 0..MAX_BOUNDARY_ATTEMPTS {
        let candidate = Uuid::new_v4().simple().to_string();
        let needle = candidate.as_bytes();
        let collides = contains(file_contents, needle) || fields.iter().any(|(_, value)| value.contains(&candidate));
        if !collides {
            return Ok(candidate);
        }
    }
    Err(CtctError::Encoding(format!("no collision-free boundary after {MAX_BOUNDARY_ATTEMPTS} attempts")))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

fn write_part(body: &mut Vec<u8>, boundary: &str, name: &str, value: &[u8]) {
    body.extend_from_slice(b"--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(CRLF);
    body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"").as_bytes());
    body.extend_from_slice(CRLF);
    body.extend_from_slice(CRLF);
    body.extend_from_slice(value);
    body.extend_from_slice(CRLF);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(multipart: &Multipart) -> String {
        String::from_utf8(multipart.body.clone()).unwrap()
    }

    #[test]
    fn three_parts_share_one_boundary() {
        let multipart = build_multipart(&[("file_name", "a.csv"), ("lists", "1,2")], "data", b"x,y\n1,2").unwrap();
        let body = text(&multipart);
        let delimiter = format!("--{}\r\n", multipart.boundary);

        assert_eq!(body.matches(&delimiter).count(), 3);
        assert!(body.ends_with(&format!("--{}--\r\n", multipart.boundary)));
        assert!(body.contains("Content-Disposition: form-data; name=\"file_name\"\r\n\r\na.csv\r\n"));
        assert!(body.contains("Content-Disposition: form-data; name=\"lists\"\r\n\r\n1,2\r\n"));
        assert!(body.contains("Content-Disposition: form-data; name=\"data\"\r\n\r\nx,y\n1,2\r\n"));
        assert!(!"x,y\n1,2".contains(&multipart.boundary));
    }

    #[test]
    fn parts_keep_field_order() {
        let multipart = build_multipart(&[("file_name", "a.csv"), ("lists", "7")], "data", b"z").unwrap();
        let body = text(&multipart);
        let file_name = body.find("name=\"file_name\"").unwrap();
        let lists = body.find("name=\"lists\"").unwrap();
        let data = body.find("name=\"data\"").unwrap();
        assert!(file_name < lists && lists < data);
    }

    #[test]
    fn content_type_names_boundary() {
        let multipart = build_multipart(&[], "data", b"").unwrap();
        assert_eq!(multipart.content_type(), format!("multipart/form-data; boundary={}", multipart.boundary));
    }

    #[test]
    fn unrepresentable_names_are_encoding_errors() {
        for bad in ["na\"me", "line\r\nbreak", ""] {
            let err = build_multipart(&[(bad, "v")], "data", b"x").unwrap_err();
            assert!(matches!(err, CtctError::Encoding(_)), "{bad:?}");
        }
        assert!(matches!(build_multipart(&[], "da\nta", b"x"), Err(CtctError::Encoding(_))));
    }

    #[test]
    fn binary_contents_are_copied_verbatim() {
        let contents = [0_u8, 159, 146, 150, 255];
        let multipart = build_multipart(&[], "data", &contents).unwrap();
        assert!(multipart.body.windows(contents.len()).any(|w| w == contents));
    }
}
