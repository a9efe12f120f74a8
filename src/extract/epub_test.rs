use std::io::{Cursor, Write};

use super::*;

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

const CONTENT_OPF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>Test Book</dc:title>
    <dc:creator>Tester</dc:creator>
    <dc:language>en</dc:language>
    <dc:identifier id="bookid">urn:uuid:00000000-0000-0000-0000-000000000001</dc:identifier>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="ch1" href="ch1.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch2" href="ch2.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="ch1"/>
    <itemref idref="ch2"/>
  </spine>
</package>"#;

const TOC_NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head><meta name="dtb:uid" content="urn:uuid:00000000-0000-0000-0000-000000000001"/></head>
  <docTitle><text>Test Book</text></docTitle>
  <navMap>
    <navPoint id="n1" playOrder="1"><navLabel><text>One</text></navLabel><content src="ch1.xhtml"/></navPoint>
    <navPoint id="n2" playOrder="2"><navLabel><text>Two</text></navLabel><content src="ch2.xhtml"/></navPoint>
  </navMap>
</ncx>"#;

const CH1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>One</title></head>
<body><h1>Chapter One</h1><p>It was a   bright
cold day.</p></body></html>"#;

const CH2: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>Two</title></head>
<body><h1>Chapter Two</h1><p>The clocks were striking thirteen.</p></body></html>"#;

fn build_epub() -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, body) in [
        ("mimetype", "application/epub+zip"),
        ("META-INF/container.xml", CONTAINER_XML),
        ("OEBPS/content.opf", CONTENT_OPF),
        ("OEBPS/toc.ncx", TOC_NCX),
        ("OEBPS/ch1.xhtml", CH1),
        ("OEBPS/ch2.xhtml", CH2),
    ] {
        zip.start_file(name, options).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

#[test]
fn extracts_spine_items_in_order() {
    let text = EpubExtractor.extract(build_epub()).unwrap();
    let one = text.find("Chapter One").unwrap();
    let two = text.find("Chapter Two").unwrap();
    assert!(one < two);
    assert!(text.contains("It was a bright cold day."));
    assert!(text.contains("The clocks were striking thirteen."));
}

#[test]
fn invalid_bytes_are_parse_error() {
    let err = EpubExtractor.extract(b"This is not an EPUB".to_vec()).unwrap_err();
    assert!(matches!(err, ExtractError::Parse { format: DocumentFormat::Epub, .. }));
}

#[test]
fn html_to_text_joins_blocks() {
    let text = html_to_text("<html><body><h2>Title</h2><p>First  line</p><p></p><p>Second</p></body></html>");
    assert_eq!(text, "Title\n\nFirst line\n\nSecond");
}

#[test]
fn html_to_text_falls_back_to_body() {
    let text = html_to_text("<html><body><div>Loose <span>text</span></div></body></html>");
    assert_eq!(text, "Loose text");
}

#[test]
fn html_to_text_empty_body() {
    assert_eq!(html_to_text("<html><body></body></html>"), "");
}
