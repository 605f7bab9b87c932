
use std::io::{Error, Write};

use tracing::warn;

use super::escape::{escape_attribute, escape_text};
use super::names::attribute_name;
use super::{DoctypeSyntax, SerializeOpts};
use crate::node::Attribute;

/// Markup writer. The first I/O error is kept and every write after it is
/// skipped, so callers only have to check once at the end.
pub struct Serializer<'w, W: 'w + Write> {
    writer: &'w mut W,
    opts: SerializeOpts,
    error: Option<Error>,
}

impl<'w, W: Write> Serializer<'w, W> {
    pub fn new(writer: &'w mut W, opts: SerializeOpts) -> Serializer<'w, W> {
        Serializer {
            writer,
            opts,
            error: None,
        }
    }

    fn do_cond<F>(&mut self, f: F)
        where F: FnOnce(&mut W) -> Result<(), Error>
    {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = f(&mut *self.writer) {
            warn!(error = %err, "markup sink failed, dropping remaining output");
            self.error = Some(err);
        }
    }

    pub fn start_elem(&mut self, name: &str, attrs: &[Attribute]) {
        let attrs = serialize_attributes(attrs);
        self.do_cond(|w| write!(w, "<{}{}>", name, attrs));
    }

    pub fn end_elem(&mut self, name: &str) {
        self.do_cond(|w| write!(w, "</{}>", name));
    }

    pub fn write_newline(&mut self) {
        self.do_cond(|w| w.write_all(b"\n"));
    }

    pub fn write_text(&mut self, text: &str) {
        let text = escape_text(text);
        self.do_cond(|w| w.write_all(text.as_bytes()));
    }

    pub fn write_raw_text(&mut self, text: &str) {
        self.do_cond(|w| w.write_all(text.as_bytes()));
    }

    pub fn write_comment(&mut self, comment: &str) {
        self.do_cond(|w| write!(w, "<!--{}-->", comment));
    }

    pub fn write_processing_instruction(&mut self, target: &str, data: &str) {
        self.do_cond(|w| write!(w, "<?{} {}>", target, data));
    }

    pub fn write_doctype(&mut self, name: &str) {
        let open = match self.opts.doctype {
            DoctypeSyntax::Legacy => "<?DOCTYPE",
            DoctypeSyntax::Standard => "<!DOCTYPE",
        };
        self.do_cond(|w| write!(w, "{} {}>", open, name));
    }

    pub fn error(self) -> Result<(), Error> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Serializes the specified attributes of an element, each preceded by a
/// single space.
pub fn serialize_attributes(attrs: &[Attribute]) -> String {
    let mut serialized = String::new();

    for attr in attrs.iter().filter(|a| a.specified()) {
        serialized.push(' ');
        serialized.push_str(&attribute_name(attr.name()));
        serialized.push_str("=\"");
        serialized.push_str(&escape_attribute(attr.value()));
        serialized.push('"');
    }

    serialized
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    use html5ever::{ns, LocalName, QualName};

    fn write_with<F>(opts: SerializeOpts, f: F) -> String
        where F: FnOnce(&mut Serializer<Vec<u8>>)
    {
        let mut buf = Vec::new();
        {
            let mut s = Serializer::new(&mut buf, opts);
            f(&mut s);
            s.error().unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_serialize_attributes() {
        let attrs = vec![Attribute::new_str("id", "test-p"),
                         Attribute::new_str("class", "hideMe")];
        assert_eq!(serialize_attributes(&attrs), r#" id="test-p" class="hideMe""#);
    }

    #[test]
    fn test_serialize_attributes_skips_implied() {
        let attrs = vec![Attribute::new_str("id", "x"),
                         Attribute::implied(QualName::new(None, ns!(), LocalName::from("shape")),
                                            "rect".into()),
                         Attribute::new_str("title", "a \"b\"")];
        assert_eq!(serialize_attributes(&attrs), r#" id="x" title="a &quot;b&quot;""#);
    }

    #[test]
    fn test_serialize_attributes_keeps_duplicates() {
        let attrs = vec![Attribute::new_str("b", "1"),
                         Attribute::new_str("a", "2"),
                         Attribute::new_str("b", "3")];
        assert_eq!(serialize_attributes(&attrs), r#" b="1" a="2" b="3""#);
    }

    #[test]
    fn test_serialize_attributes_empty() {
        assert_eq!(serialize_attributes(&[]), "");
    }

    #[test]
    fn test_primitives() {
        let out = write_with(SerializeOpts::default(), |s| {
            s.start_elem("p", &[Attribute::new_str("id", "a")]);
            s.write_text("1 < 2");
            s.write_comment(" -- ");
            s.write_processing_instruction("xml-stylesheet", "href=\"a.css\"");
            s.end_elem("p");
        });
        assert_eq!(out,
                   r#"<p id="a">1 &lt; 2<!-- -- --><?xml-stylesheet href="a.css"></p>"#);
    }

    #[test]
    fn test_doctype_syntax() {
        let legacy = write_with(SerializeOpts::default(), |s| s.write_doctype("html"));
        assert_eq!(legacy, "<?DOCTYPE html>");

        let opts = SerializeOpts { doctype: DoctypeSyntax::Standard, ..Default::default() };
        let standard = write_with(opts, |s| s.write_doctype("html"));
        assert_eq!(standard, "<!DOCTYPE html>");
    }

    struct FailAfter(usize);

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "sink closed"));
            }
            self.0 -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_error_is_kept() {
        let mut sink = FailAfter(1);
        let mut s = Serializer::new(&mut sink, SerializeOpts::default());
        s.write_raw_text("ok");
        s.write_raw_text("fails");
        s.write_raw_text("skipped");

        let err = s.error().unwrap_err();
        assert_eq!(err.to_string(), "sink closed");
        assert_eq!(sink.0, 0);
    }
}
