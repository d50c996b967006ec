use minihttpd::http::response::{ConnectionDirective, Response};
use minihttpd::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_serialize_ok() {
    let response = Response::ok(ConnectionDirective::Echo("keep-alive".to_string()), b"<p>hi</p>".to_vec());
    let bytes = serialize_response(&response, "HTTP/1.1");

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 200 OK\r\nConnection: keep-alive\r\nContent-Length: 9\r\n\r\n<p>hi</p>\r\n"[..]
    );
}

#[test]
fn test_serialize_ok_binary_body() {
    let body = vec![0x00, 0xff, b'\r', b'\n', 0x10];
    let response = Response::ok(ConnectionDirective::Echo("close".to_string()), body.clone());
    let bytes = serialize_response(&response, "HTTP/1.1");

    let mut expected = b"HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Length: 5\r\n\r\n".to_vec();
    expected.extend_from_slice(&body);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(&bytes[..], &expected[..]);
}

#[test]
fn test_serialize_ok_empty_body() {
    let response = Response::ok(ConnectionDirective::Echo(String::new()), Vec::new());
    let bytes = serialize_response(&response, "HTTP/1.1");

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 200 OK\r\nConnection: \r\nContent-Length: 0\r\n\r\n\r\n"[..]
    );
}

#[test]
fn test_serialize_moved_permanently() {
    let response = Response::moved_permanently("result.html");
    let bytes = serialize_response(&response, "HTTP/1.1");

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 301 Moved Permanently\r\nConnection: close\r\nLocation: result.html\r\n\r\n\r\n"[..]
    );
}

#[test]
fn test_serialize_not_found() {
    let bytes = serialize_response(&Response::not_found(), "HTTP/1.1");

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 404 Not Found\r\nConnection: close\r\n\r\n\r\n \r\n"[..]
    );
}

#[test]
fn test_serialize_echoes_protocol() {
    let bytes = serialize_response(&Response::not_found(), "HTTP/1.0");

    assert!(bytes.starts_with(b"HTTP/1.0 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_writer_writes_whole_response() {
    let response = Response::moved_permanently("result.html");
    let mut writer = ResponseWriter::new(&response, "HTTP/1.1");
    let expected = writer.as_bytes().to_vec();

    let mut sink: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut sink).await.unwrap();

    assert_eq!(sink, expected);
}
