use crate::autoconfig::model::{ConfigDocument, ProviderRecord, Role, ServerDescriptor};
use crate::error::Error;
use quick_xml::events::BytesText;
use quick_xml::Writer;
use std::io::Write;

/// Declaration prepended to served documents.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serialize a document to the `clientConfig` schema, without an XML declaration.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] if the document has no provider, a provider lacks an
/// incoming or outgoing server, or a server is listed under the wrong role.
///
/// Returns [`Error::Xml`] if writing fails.
pub fn serialize(doc: &ConfigDocument) -> Result<Vec<u8>, Error> {
    validate(doc)?;

    let mut writer = Writer::new(Vec::new());
    writer
        .create_element("clientConfig")
        .with_attribute(("version", doc.version))
        .write_inner_content(|w| {
            for provider in &doc.providers {
                write_provider(w, provider)?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(writer.into_inner())
}

/// [`serialize`] a document behind the [`XML_HEADER`] declaration.
///
/// # Errors
///
/// See [`serialize`].
pub fn render(doc: &ConfigDocument) -> Result<Vec<u8>, Error> {
    let body = serialize(doc)?;
    let mut out = Vec::with_capacity(XML_HEADER.len() + body.len());
    out.extend_from_slice(XML_HEADER.as_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

fn validate(doc: &ConfigDocument) -> Result<(), Error> {
    if doc.providers.is_empty() {
        return Err(Error::MalformedDocument("no email provider"));
    }
    for provider in &doc.providers {
        if provider.incoming.is_empty() || provider.outgoing.is_empty() {
            return Err(Error::MalformedDocument(
                "email provider needs incoming and outgoing servers",
            ));
        }
        if provider.incoming.iter().any(|s| s.role != Role::Incoming)
            || provider.outgoing.iter().any(|s| s.role != Role::Outgoing)
        {
            return Err(Error::MalformedDocument("server listed under the wrong role"));
        }
    }
    Ok(())
}

fn write_provider<W: Write>(
    w: &mut Writer<W>,
    provider: &ProviderRecord,
) -> quick_xml::Result<()> {
    w.create_element("emailProvider")
        .with_attribute(("id", provider.id.as_str()))
        .write_inner_content(|w| {
            write_text(w, "domain", &provider.domain)?;
            write_text(w, "displayName", &provider.display_name)?;
            write_text(w, "displayShortName", &provider.display_short_name)?;
            for server in provider.incoming.iter().chain(&provider.outgoing) {
                write_server(w, server)?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_server<W: Write>(w: &mut Writer<W>, server: &ServerDescriptor) -> quick_xml::Result<()> {
    w.create_element(server.role.element_name())
        .with_attribute(("type", server.kind))
        .write_inner_content(|w| {
            write_text(w, "hostname", &server.endpoint.hostname)?;
            write_text(w, "port", &server.endpoint.port.to_string())?;
            write_text(w, "socketType", server.socket_type)?;
            write_text(w, "authentication", server.authentication)?;
            write_text(w, "username", server.username)?;
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_text<W: Write>(w: &mut Writer<W>, element: &str, text: &str) -> quick_xml::Result<()> {
    w.create_element(element)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
