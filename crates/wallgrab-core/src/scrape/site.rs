use std::fmt;

/// Sites whose page markup we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Zhihu,
    Bilibili,
}

impl Site {
    /// Detects the site from a (normalised) page URL by substring match.
    pub fn detect(url: &str) -> Option<Site> {
        if url.contains("zhihu.com") {
            Some(Site::Zhihu)
        } else if url.contains("bilibili.com") {
            Some(Site::Bilibili)
        } else {
            None
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::Zhihu => write!(f, "zhihu"),
            Site::Bilibili => write!(f, "bilibili"),
        }
    }
}
