use crate::error::Error;
use hyper::{
    header::{HeaderName, HeaderValue},
    HeaderMap,
};
use std::collections::HashMap;

pub fn extract_headers(header_map: &HeaderMap) -> HashMap<String, String> {
    // it currently ignores header values with opaque characters
    let mut headers: HashMap<String, String> = HashMap::new();

    for (key, value) in header_map
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str(), v)))
    {
        headers
            .entry(String::from(key))
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| String::from(value));
    }

    headers
}

pub fn put_headers<'a, I: IntoIterator<Item = &'a (String, String)>>(
    header_map: &mut HeaderMap<HeaderValue>,
    headers: I,
) -> Result<(), Error> {
    for (key, value) in headers {
        let header_name = HeaderName::from_lowercase(key.to_lowercase().as_bytes())?;
        let header_value = HeaderValue::from_str(value)?;
        header_map.append(header_name, header_value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_headers_accepts_empty_values() {
        let mut header_map = HeaderMap::new();
        let headers = vec![(String::from("X-Yummly-Locale"), String::new())];

        put_headers(&mut header_map, &headers).unwrap();

        assert_eq!(header_map.get("x-yummly-locale").unwrap(), "");
    }

    #[test]
    fn extract_headers_joins_repeated_values() {
        let mut header_map = HeaderMap::new();
        header_map.append("allow", HeaderValue::from_static("GET"));
        header_map.append("allow", HeaderValue::from_static("HEAD"));

        let headers = extract_headers(&header_map);

        assert_eq!(headers.get("allow").unwrap(), "GET, HEAD");
    }
}
