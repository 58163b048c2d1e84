//! Claim document upload: a capped local file list and the claim form.
//! Nothing is transmitted.

use tracing::{debug, info};

/// Most files the list will hold across all batches.
pub const MAX_FILES: usize = 5;

/// Metadata of a picked or dropped file. The bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    /// MIME type as reported by the browser; may be empty.
    pub mime: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self { name: name.into(), size, mime: mime.into() }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn icon(&self) -> &'static str {
        if self.is_image() { "🖼️" } else { "📄" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
    cap: usize,
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::with_cap(MAX_FILES)
    }
}

impl UploadQueue {
    /// A queue holding at most `cap` files, never more than [`MAX_FILES`].
    pub fn with_cap(cap: usize) -> Self {
        Self { files: Vec::new(), cap: cap.clamp(1, MAX_FILES) }
    }

    /// Append as many of `batch` as fit under the cap, in order, and return
    /// how many were taken. The rest are dropped.
    pub fn add_batch(&mut self, batch: impl IntoIterator<Item = UploadedFile>) -> usize {
        let room = self.cap.saturating_sub(self.files.len());
        let before = self.files.len();
        self.files.extend(batch.into_iter().take(room));
        let added = self.files.len() - before;
        debug!(added, total = self.files.len(), "files queued");
        added
    }

    /// Remove the file at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<UploadedFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_full(&self) -> bool {
        self.files.len() >= self.cap
    }
}

// ─── Claim form ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClaimKind {
    #[default]
    Individual,
    Community,
    CommunityResource,
}

impl ClaimKind {
    pub const ALL: [ClaimKind; 3] =
        [ClaimKind::Individual, ClaimKind::Community, ClaimKind::CommunityResource];

    pub fn value(self) -> &'static str {
        match self {
            ClaimKind::Individual => "individual",
            ClaimKind::Community => "community",
            ClaimKind::CommunityResource => "community-resource",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClaimKind::Individual => "Individual Forest Rights",
            ClaimKind::Community => "Community Forest Rights",
            ClaimKind::CommunityResource => "Community Forest Resource",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == value)
    }
}

/// `(value, label)` pairs for the claim form village select.
pub const CLAIM_VILLAGES: [(&str, &str); 5] = [
    ("meppadi", "Meppadi"),
    ("sulthan-bathery", "Sulthan Bathery"),
    ("munnar", "Munnar"),
    ("thekkady", "Thekkady"),
    ("attappady", "Attappady"),
];

pub const REQUIRED_DOCUMENTS: [&str; 4] = [
    "Aadhaar Card or Identity Proof",
    "Land Survey Documents",
    "Community Verification Certificate",
    "Photographs of Land/Property",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub name: String,
    /// Value from [`CLAIM_VILLAGES`]; empty until chosen.
    pub village: String,
    pub kind: ClaimKind,
    pub description: String,
}

impl ClaimForm {
    /// Submission needs a name, a village and at least one document.
    pub fn can_submit(&self, queue: &UploadQueue) -> bool {
        !self.name.is_empty() && !self.village.is_empty() && !queue.is_empty()
    }

    /// Simulated submission: logs, then resets the form and the file list.
    /// Returns `false` without touching anything if the form is incomplete.
    pub fn submit(&mut self, queue: &mut UploadQueue) -> bool {
        if !self.can_submit(queue) {
            return false;
        }
        info!(
            village = %self.village,
            kind = self.kind.value(),
            files = queue.len(),
            "claim application submitted"
        );
        *self = ClaimForm::default();
        queue.clear();
        true
    }
}

/// Human-readable size with up to two decimals, e.g. `1.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".into();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<UploadedFile> {
        (0..n).map(|i| UploadedFile::new(format!("doc{i}.pdf"), 1000, "application/pdf")).collect()
    }

    #[test]
    fn test_queue_never_exceeds_cap() {
        let mut q = UploadQueue::default();
        assert_eq!(q.add_batch(files(3)), 3);
        assert_eq!(q.add_batch(files(4)), 2);
        assert_eq!(q.len(), MAX_FILES);
        assert_eq!(q.add_batch(files(1)), 0);
        assert!(q.is_full());

        let mut q = UploadQueue::default();
        assert_eq!(q.add_batch(files(12)), 5);
        assert_eq!(q.files()[4].name, "doc4.pdf");
    }

    #[test]
    fn test_configured_cap_cannot_exceed_five() {
        let mut q = UploadQueue::with_cap(12);
        assert_eq!(q.cap(), MAX_FILES);
        assert_eq!(q.add_batch(files(12)), MAX_FILES);
        assert_eq!(q.len(), MAX_FILES);

        let mut q = UploadQueue::with_cap(3);
        assert_eq!(q.add_batch(files(4)), 3);
        assert_eq!(UploadQueue::with_cap(0).cap(), 1);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let mut q = UploadQueue::default();
        q.add_batch(files(5));
        assert_eq!(q.remove(1).map(|f| f.name), Some("doc1.pdf".into()));
        assert!(q.remove(10).is_none());
        assert_eq!(q.add_batch(files(3)), 1);
        assert_eq!(q.len(), 5);
    }

    #[test]
    fn test_submit_requires_name_village_and_file() {
        let mut q = UploadQueue::default();
        let mut form = ClaimForm { name: "Ravi".into(), ..Default::default() };
        assert!(!form.can_submit(&q));
        form.village = "munnar".into();
        assert!(!form.can_submit(&q));
        q.add_batch(files(1));
        assert!(form.can_submit(&q));

        form.kind = ClaimKind::Community;
        assert!(form.submit(&mut q));
        assert_eq!(form, ClaimForm::default());
        assert!(q.is_empty());
        assert!(!form.submit(&mut q));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_image_detection() {
        assert!(UploadedFile::new("plot.png", 10, "image/png").is_image());
        assert!(!UploadedFile::new("deed.pdf", 10, "application/pdf").is_image());
        assert_eq!(ClaimKind::from_value("community-resource"), Some(ClaimKind::CommunityResource));
    }
}
