use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// A stock-keeping unit: an article number and a physical width.
///
/// Articles are values. They have no identity of their own and are owned by
/// whichever storage location currently holds them; picking moves them out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord", into = "ArticleRecord")]
pub struct Article {
    art_nr: String,
    width: f64,
}

impl ValueObject for Article {}

impl Article {
    /// Maximum length of an article number, in characters.
    pub const MAX_ART_NR_LENGTH: usize = 20;
    pub const MIN_WIDTH: f64 = 0.0;
    pub const MAX_WIDTH: f64 = 999.0;

    /// Create a validated article.
    ///
    /// Fails with `InvalidArgument` if the article number is longer than
    /// [`Self::MAX_ART_NR_LENGTH`] or the width is not finite or outside
    /// `MIN_WIDTH..=MAX_WIDTH`. Valid inputs are stored as given.
    pub fn new(art_nr: impl Into<String>, width: f64) -> DomainResult<Self> {
        let art_nr = art_nr.into();

        if art_nr.chars().count() > Self::MAX_ART_NR_LENGTH {
            return Err(DomainError::invalid_argument(format!(
                "article number exceeds {} characters",
                Self::MAX_ART_NR_LENGTH
            )));
        }
        if !width.is_finite() {
            return Err(DomainError::invalid_argument("width must be finite"));
        }
        if width < Self::MIN_WIDTH {
            return Err(DomainError::invalid_argument(format!(
                "width {width} below {}",
                Self::MIN_WIDTH
            )));
        }
        if width > Self::MAX_WIDTH {
            return Err(DomainError::invalid_argument(format!(
                "width {width} above {}",
                Self::MAX_WIDTH
            )));
        }

        Ok(Self { art_nr, width })
    }

    pub fn art_nr(&self) -> &str {
        &self.art_nr
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Only the upper bound is enforced here; negative widths are accepted.
    pub fn set_width(&mut self, width: f64) -> DomainResult<()> {
        if !width.is_finite() || width > Self::MAX_WIDTH {
            return Err(DomainError::invalid_width(format!(
                "width {width} above {}",
                Self::MAX_WIDTH
            )));
        }
        self.width = width;
        Ok(())
    }

    pub fn set_art_nr(&mut self, art_nr: impl Into<String>) -> DomainResult<()> {
        let art_nr = art_nr.into();
        if art_nr.chars().count() > Self::MAX_ART_NR_LENGTH {
            return Err(DomainError::invalid_name(format!(
                "article number exceeds {} characters",
                Self::MAX_ART_NR_LENGTH
            )));
        }
        self.art_nr = art_nr;
        Ok(())
    }

    /// Case-insensitive article number comparison.
    pub fn has_art_nr(&self, art_nr: &str) -> bool {
        eq_ignore_case(&self.art_nr, art_nr)
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Wire form of an [`Article`]. A missing article number is rejected on conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub art_nr: Option<String>,
    #[serde(default)]
    pub width: f64,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        let art_nr = record
            .art_nr
            .ok_or_else(|| DomainError::invalid_argument("article number is required"))?;
        Article::new(art_nr, record.width)
    }
}

impl From<Article> for ArticleRecord {
    fn from(article: Article) -> Self {
        Self {
            art_nr: Some(article.art_nr),
            width: article.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_article_is_empty() {
        let article = Article::default();
        assert_eq!(article.art_nr(), "");
        assert_eq!(article.width(), 0.0);
    }

    #[test]
    fn new_keeps_values_unchanged() {
        let article = Article::new("12345", 42.5).unwrap();
        assert_eq!(article.art_nr(), "12345");
        assert_eq!(article.width(), 42.5);
    }

    #[test]
    fn new_accepts_boundaries() {
        assert!(Article::new("a".repeat(20), 0.0).is_ok());
        assert!(Article::new("", 999.0).is_ok());
    }

    #[test]
    fn new_rejects_long_art_nr() {
        let err = Article::new("a".repeat(21), 1.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn art_nr_length_counts_characters() {
        assert!(Article::new("ä".repeat(20), 1.0).is_ok());
    }

    #[test]
    fn new_rejects_width_out_of_range() {
        for width in [-0.1, 999.1, f64::NAN, f64::INFINITY] {
            let err = Article::new("A", width).unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidArgument(_)),
                "width {width} should be rejected"
            );
        }
    }

    #[test]
    fn set_width_rejects_only_upper_bound() {
        let mut article = Article::new("A", 10.0).unwrap();

        let err = article.set_width(1000.0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidWidth(_)));
        assert_eq!(article.width(), 10.0);

        // Known quirk: the setter has no lower bound, unlike the constructor.
        article.set_width(-5.0).unwrap();
        assert_eq!(article.width(), -5.0);
    }

    #[test]
    fn set_art_nr_validates_length() {
        let mut article = Article::default();
        article.set_art_nr("SKU-1").unwrap();
        assert_eq!(article.art_nr(), "SKU-1");

        let err = article.set_art_nr("x".repeat(21)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));
        assert_eq!(article.art_nr(), "SKU-1");
    }

    #[test]
    fn art_nr_matching_ignores_case() {
        let article = Article::new("Abc-1", 1.0).unwrap();
        assert!(article.has_art_nr("ABC-1"));
        assert!(article.has_art_nr("abc-1"));
        assert!(!article.has_art_nr("abc-2"));
        assert!(!article.has_art_nr("abc"));
    }

    #[test]
    fn deserialization_requires_art_nr() {
        let err = serde_json::from_str::<Article>(r#"{"width": 3.0}"#).unwrap_err();
        assert!(err.to_string().contains("article number is required"));
    }

    #[test]
    fn deserialization_revalidates_width() {
        assert!(serde_json::from_str::<Article>(r#"{"art_nr": "A", "width": 1000.0}"#).is_err());

        let article: Article = serde_json::from_str(r#"{"art_nr": "A"}"#).unwrap();
        assert_eq!(article.width(), 0.0);
    }

    #[test]
    fn serializes_as_record() {
        let article = Article::new("A-7", 12.0).unwrap();
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json, serde_json::json!({ "art_nr": "A-7", "width": 12.0 }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: valid inputs are stored exactly as given.
            #[test]
            fn valid_inputs_are_kept(
                art_nr in "[A-Za-z0-9-]{0,20}",
                width in 0.0f64..=999.0,
            ) {
                let article = Article::new(art_nr.clone(), width).unwrap();
                prop_assert_eq!(article.art_nr(), art_nr.as_str());
                prop_assert_eq!(article.width(), width);
            }

            /// Property: article numbers over the limit are always rejected.
            #[test]
            fn long_art_nr_is_rejected(
                art_nr in "[A-Za-z0-9]{21,40}",
                width in 0.0f64..=999.0,
            ) {
                let rejected = matches!(
                    Article::new(art_nr, width),
                    Err(DomainError::InvalidArgument(_))
                );
                prop_assert!(rejected);
            }
        }
    }
}
