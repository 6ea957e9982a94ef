//! Keyword/condition accumulation shared by WHERE and HAVING.

/// Ordered term list for one conditional section.
///
/// Terms alternate a leading keyword and caller-supplied condition text:
/// the section keyword (`WHERE`/`HAVING`) opens the group, `AND`/`OR` join
/// every condition after the first. A non-empty group always starts with
/// its section keyword, never with a conjunction.
#[derive(Clone, Debug)]
pub(crate) struct ClauseGroup {
    keyword: &'static str,
    terms: Vec<String>,
}

impl ClauseGroup {
    pub(crate) fn new(keyword: &'static str) -> Self {
        Self {
            keyword,
            terms: Vec::new(),
        }
    }

    /// Accept a condition: opens the section on first use, `AND` afterwards.
    pub(crate) fn and(&mut self, condition: &str) {
        if self.terms.is_empty() {
            self.terms.push(self.keyword.to_string());
        } else {
            self.terms.push("AND".to_string());
        }
        self.terms.push(condition.to_string());
    }

    /// Accept an `OR` condition only if the section is already open.
    ///
    /// Returns `false` and leaves the group untouched when no prior term
    /// exists, so the caller can skip recording the bound value.
    pub(crate) fn or(&mut self, condition: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        self.terms.push("OR".to_string());
        self.terms.push(condition.to_string());
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Append the stored terms to `out`, each preceded by a single space.
    pub(crate) fn render_into(&self, out: &mut String) {
        for term in &self.terms {
            out.push(' ');
            out.push_str(term);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(group: &ClauseGroup) -> String {
        let mut out = String::new();
        group.render_into(&mut out);
        out
    }

    #[test]
    fn test_opens_with_section_keyword() {
        let mut group = ClauseGroup::new("WHERE");
        group.and("id = ?");
        assert_eq!(rendered(&group), " WHERE id = ?");
    }

    #[test]
    fn test_and_after_first() {
        let mut group = ClauseGroup::new("WHERE");
        group.and("id = ?");
        group.and("name = ?");
        assert_eq!(rendered(&group), " WHERE id = ? AND name = ?");
    }

    #[test]
    fn test_or_requires_open_section() {
        let mut group = ClauseGroup::new("HAVING");
        assert!(!group.or("age > ?"));
        assert!(group.is_empty());

        group.and("age > ?");
        assert!(group.or("phone = ?"));
        assert_eq!(rendered(&group), " HAVING age > ? OR phone = ?");
    }

    #[test]
    fn test_empty_renders_nothing() {
        let group = ClauseGroup::new("WHERE");
        assert_eq!(rendered(&group), "");
    }
}
