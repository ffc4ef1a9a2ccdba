//! Download handles for the exported artifacts of a result.

use grafos_core::models::{ArtifactKind, Downloads};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a `data:` URI embedding the payload
pub fn data_uri(kind: ArtifactKind, payload: &str) -> String {
    format!(
        "data:{};charset=utf-8,{}",
        kind.mime_type(),
        utf8_percent_encode(payload, URI_COMPONENT)
    )
}

/// One download affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    pub kind: ArtifactKind,
    pub href: Option<String>,
    pub hidden: bool,
}

impl DownloadLink {
    fn empty(kind: ArtifactKind) -> Self {
        Self { kind, href: None, hidden: true }
    }

    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}

/// The downloads section and its three links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadsSection {
    pub hidden: bool,
    pub links: [DownloadLink; 3],
}

impl Default for DownloadsSection {
    fn default() -> Self {
        Self { hidden: true, links: ArtifactKind::ALL.map(DownloadLink::empty) }
    }
}

impl DownloadsSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every handle from the new bundle
    ///
    /// A link is shown only when its artifact is present; the section is
    /// hidden when the bundle is absent or carries no artifact at all.
    pub fn update(&mut self, downloads: Option<&Downloads>) {
        let Some(downloads) = downloads else {
            *self = Self::default();
            return;
        };

        for link in self.links.iter_mut() {
            link.href = downloads.payload(link.kind).map(|payload| data_uri(link.kind, payload));
            link.hidden = link.href.is_none();
        }
        self.hidden = !downloads.has_any();
    }

    pub fn link(&self, kind: ArtifactKind) -> &DownloadLink {
        let idx = match kind {
            ArtifactKind::EdgesGeoJson => 0,
            ArtifactKind::MetricsCsv => 1,
            ArtifactKind::HexGeoJson => 2,
        };
        &self.links[idx]
    }

    /// Links that are currently shown
    pub fn visible_links(&self) -> impl Iterator<Item = &DownloadLink> {
        let section_hidden = self.hidden;
        self.links.iter().filter(move |l| !section_hidden && !l.hidden)
    }
}
