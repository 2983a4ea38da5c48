//! Aggregate statistics over a citation collection

use serde::{Deserialize, Serialize};

/// Number of citations in one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainCount {
    /// Domain code
    pub domain: String,
    /// Citations in the domain
    pub count: usize,
}

/// Number of citations published in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    /// Publication year
    pub year: i32,
    /// Citations from that year
    pub count: usize,
}

/// Number of citations of one study type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTypeCount {
    /// Study type label
    #[serde(rename = "type")]
    pub study_type: String,
    /// Citations of that study type
    pub count: usize,
}

/// Summary of a citation collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total number of citations
    pub total_citations: usize,

    /// Per-domain counts, in first-seen domain order
    pub by_domain: Vec<DomainCount>,

    /// Per-year counts, ascending by year
    pub by_year: Vec<YearCount>,

    /// Citations reporting an effect size
    pub with_effect_sizes: usize,

    /// Per-study-type counts, in first-seen order
    pub by_study_type: Vec<StudyTypeCount>,

    /// Mean evidence quality over citations that report one, rounded to two
    /// decimals. `None` when no citation reports a quality score; callers
    /// must show this as "no data", not as zero.
    pub avg_evidence_quality: Option<f64>,
}

/// Mean of the values rounded to two decimal places, `None` for no values
pub fn rounded_mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return None;
    }

    let mean = sum / count as f64;
    Some((mean * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean([7.0, 8.0, 8.0]), Some(7.67));
        assert_eq!(rounded_mean([5.0]), Some(5.0));
        assert_eq!(rounded_mean([0.125, 0.125]), Some(0.13));
    }

    #[test]
    fn test_rounded_mean_of_nothing_is_none() {
        assert_eq!(rounded_mean(std::iter::empty()), None);
    }

    #[test]
    fn test_study_type_serializes_as_type() {
        let count = StudyTypeCount {
            study_type: "meta-analysis".to_string(),
            count: 3,
        };
        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["type"], "meta-analysis");
    }
}
