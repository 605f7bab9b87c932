
use html5ever::{ns, Namespace, QualName};

/// How names in a namespace are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub prefix: &'static str,
    pub preserve_case: bool,
}

const UNPREFIXED: NamespaceInfo = NamespaceInfo {
    prefix: "",
    preserve_case: false,
};

pub fn namespace_info(ns: &Namespace) -> Option<NamespaceInfo> {
    match *ns {
        ns!() | ns!(html) | ns!(mathml) | ns!(svg) => Some(UNPREFIXED),
        ns!(xlink) => Some(NamespaceInfo {
            prefix: "xlink:",
            preserve_case: true,
        }),
        ns!(xml) => Some(NamespaceInfo {
            prefix: "xml:",
            preserve_case: true,
        }),
        ns!(xmlns) => Some(NamespaceInfo {
            prefix: "xmlns:",
            preserve_case: true,
        }),
        _ => None,
    }
}

/// The name as written in markup, `prefix:local` or just `local`.
pub fn qualified_name(name: &QualName) -> String {
    match name.prefix {
        Some(ref prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

/// Resolves the tag name an element is serialized with.
///
/// HTML, SVG and MathML elements are written with their lowercased local
/// name. Elements in any other namespace keep their qualified name as is.
pub fn element_name(name: &QualName) -> String {
    if name.ns == ns!() {
        return qualified_name(name).to_lowercase();
    }

    let info = namespace_info(&name.ns);
    let resolved = match info {
        Some(ref info) if info.prefix.is_empty() => name.local.to_string(),
        _ => qualified_name(name),
    };

    match info {
        Some(ref info) if !info.preserve_case => resolved.to_lowercase(),
        _ => resolved,
    }
}

/// Resolves the name an attribute is serialized with.
///
/// Unprefixed attributes in the XLink, XML and XMLNS namespaces get their
/// canonical prefix back. `xmlns` itself never takes a prefix.
pub fn attribute_name(name: &QualName) -> String {
    if name.ns == ns!() {
        return qualified_name(name).to_lowercase();
    }

    let info = namespace_info(&name.ns);
    let qualified = qualified_name(name);

    if !qualified.contains(':') {
        let prefix = match info {
            Some(ref info) if &*name.local != "xmlns" => info.prefix,
            _ => "",
        };
        return format!("{}{}", prefix, name.local);
    }

    match info {
        Some(ref info) if info.preserve_case => qualified,
        _ => qualified.to_lowercase(),
    }
}
