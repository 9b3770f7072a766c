use crate::application::dto::{AdvisorySection, ResolveRequest, ResolveResponse};
use crate::ports::outbound::{AdvisoryReader, ProgressReporter};
use crate::purl_resolution::services::PurlResolver;
use crate::shared::Result;
use std::path::Path;

/// Source label of the combined section when several advisories accumulate
pub const COMBINED_SOURCE_LABEL: &str = "all advisories";

/// ResolvePurlsUseCase - finds the package URLs of tracked products
///
/// Reads each requested advisory through the [`AdvisoryReader`] port and runs
/// one [`PurlResolver`] over all of them. In accumulated mode (default) the
/// results of every advisory are merged into one section; in isolated mode
/// the resolver is cleared after each advisory and every advisory gets its
/// own section.
///
/// # Type Parameters
/// * `AR` - AdvisoryReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolvePurlsUseCase<AR, PR> {
    advisory_reader: AR,
    progress_reporter: PR,
}

impl<AR, PR> ResolvePurlsUseCase<AR, PR>
where
    AR: AdvisoryReader,
    PR: ProgressReporter,
{
    pub fn new(advisory_reader: AR, progress_reporter: PR) -> Self {
        Self {
            advisory_reader,
            progress_reporter,
        }
    }

    /// Executes purl resolution
    ///
    /// # Errors
    /// Fails on the first advisory that cannot be read. The resolver itself
    /// never fails: advisories without matches simply contribute nothing.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let total = request.advisory_paths.len();
        self.progress_reporter.report(&format!(
            "🔍 Tracking {} product id(s) across {} advisory file(s)",
            request.product_ids.len(),
            total
        ));

        let mut resolver = PurlResolver::new(request.product_ids);
        let mut sections = Vec::new();

        for (idx, path) in request.advisory_paths.iter().enumerate() {
            let source = path.display().to_string();
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&source));

            self.scan_advisory(&mut resolver, path)?;

            if request.isolate_advisories {
                sections.push(AdvisorySection::from_resolver(source, &resolver));
                resolver.clear();
            }
        }

        if !request.isolate_advisories {
            let source = match request.advisory_paths.as_slice() {
                [single] => single.display().to_string(),
                _ => COMBINED_SOURCE_LABEL.to_string(),
            };
            sections.push(AdvisorySection::from_resolver(source, &resolver));
        }

        let response = ResolveResponse::new(sections, total);
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} package URL(s) in {} advisory file(s)",
            response.total_purls(),
            total
        ));

        Ok(response)
    }

    fn scan_advisory(&self, resolver: &mut PurlResolver, path: &Path) -> Result<()> {
        let advisory = self.advisory_reader.read_advisory(path)?;

        if advisory.product_tree.is_none() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} has no product_tree; nothing to resolve.",
                path.display()
            ));
        }

        resolver.run(&advisory);

        let truncated = resolver.truncated_branches();
        if truncated > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} branch(es) in {} exceed the nesting limit and were skipped.",
                truncated,
                path.display()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purl_resolution::domain::{
        Advisory, Branch, FullProductName, ProductId, ProductTree, Purl,
    };
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct InMemoryAdvisoryReader {
        advisories: HashMap<PathBuf, Advisory>,
    }

    impl InMemoryAdvisoryReader {
        fn new(entries: Vec<(&str, Advisory)>) -> Self {
            Self {
                advisories: entries
                    .into_iter()
                    .map(|(path, advisory)| (PathBuf::from(path), advisory))
                    .collect(),
            }
        }
    }

    impl AdvisoryReader for InMemoryAdvisoryReader {
        fn read_advisory(&self, path: &Path) -> Result<Advisory> {
            self.advisories
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no advisory at {}", path.display()))
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.messages
                .borrow_mut()
                .push(format!("{}/{}", current, total));
        }

        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn flat(products: Vec<FullProductName>) -> Advisory {
        Advisory::new(Some(ProductTree::new(products, vec![])))
    }

    fn request(ids: &[&str], paths: &[&str], isolate: bool) -> ResolveRequest {
        ResolveRequest::builder()
            .product_ids(ids.iter().map(|id| ProductId::from(*id)))
            .advisory_paths(paths.iter().copied())
            .isolate_advisories(isolate)
            .build()
            .unwrap()
    }

    fn reader() -> InMemoryAdvisoryReader {
        InMemoryAdvisoryReader::new(vec![
            (
                "first.json",
                flat(vec![
                    FullProductName::with_purl("P1", "pkg:generic/a"),
                    FullProductName::with_purl("P2", "pkg:generic/b"),
                ]),
            ),
            (
                "second.json",
                flat(vec![
                    FullProductName::with_purl("P1", "pkg:generic/a"),
                    FullProductName::with_purl("P1", "pkg:generic/c"),
                ]),
            ),
            ("empty.json", Advisory::default()),
        ])
    }

    #[test]
    fn test_single_advisory_section_uses_its_path() {
        let use_case = ResolvePurlsUseCase::new(reader(), RecordingReporter::default());

        let response = use_case
            .execute(request(&["P1", "P2"], &["first.json"], false))
            .unwrap();

        assert_eq!(response.sections.len(), 1);
        assert_eq!(response.sections[0].source, "first.json");
        assert_eq!(response.total_purls(), 2);
    }

    #[test]
    fn test_accumulated_mode_merges_advisories() {
        let use_case = ResolvePurlsUseCase::new(reader(), RecordingReporter::default());

        let response = use_case
            .execute(request(&["P1"], &["first.json", "second.json"], false))
            .unwrap();

        assert_eq!(response.sections.len(), 1);
        let section = &response.sections[0];
        assert_eq!(section.source, COMBINED_SOURCE_LABEL);
        assert_eq!(
            section.products[0].purls,
            vec![Purl::from("pkg:generic/a"), Purl::from("pkg:generic/c")]
        );
        assert_eq!(response.advisories_read, 2);
    }

    #[test]
    fn test_isolated_mode_reports_each_advisory() {
        let use_case = ResolvePurlsUseCase::new(reader(), RecordingReporter::default());

        let response = use_case
            .execute(request(&["P1", "P2"], &["first.json", "second.json"], true))
            .unwrap();

        assert_eq!(response.sections.len(), 2);
        assert_eq!(response.sections[0].source, "first.json");
        assert_eq!(response.sections[0].purl_count(), 2);
        assert_eq!(response.sections[1].source, "second.json");
        assert_eq!(response.sections[1].products.len(), 1);
        assert_eq!(
            response.sections[1].products[0].purls,
            vec![Purl::from("pkg:generic/a"), Purl::from("pkg:generic/c")]
        );
    }

    #[test]
    fn test_missing_product_tree_warns_but_succeeds() {
        let reporter = RecordingReporter::default();
        let use_case = ResolvePurlsUseCase::new(reader(), reporter);

        let response = use_case
            .execute(request(&["P1"], &["empty.json"], false))
            .unwrap();

        assert!(!response.has_purls());
        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages.iter().any(|m| m.contains("has no product_tree")));
    }

    #[test]
    fn test_read_failure_aborts() {
        let use_case = ResolvePurlsUseCase::new(reader(), RecordingReporter::default());

        let result = use_case.execute(request(&["P1"], &["first.json", "missing.json"], false));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing.json"));
    }

    #[test]
    fn test_reports_progress_for_every_advisory() {
        let use_case = ResolvePurlsUseCase::new(reader(), RecordingReporter::default());

        use_case
            .execute(request(&["P1"], &["first.json", "second.json"], true))
            .unwrap();

        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages.iter().any(|m| m == "1/2"));
        assert!(messages.iter().any(|m| m == "2/2"));
        assert!(messages
            .last()
            .unwrap()
            .contains("Found 3 package URL(s) in 2 advisory file(s)"));
    }

    #[test]
    fn test_branch_products_are_resolved() {
        let advisory = Advisory::new(Some(ProductTree::new(
            vec![],
            vec![Branch::new(
                None,
                vec![Branch::leaf(FullProductName::with_purl("P1", "pkg:generic/deep"))],
            )],
        )));
        let use_case = ResolvePurlsUseCase::new(
            InMemoryAdvisoryReader::new(vec![("tree.json", advisory)]),
            RecordingReporter::default(),
        );

        let response = use_case
            .execute(request(&["P1"], &["tree.json"], false))
            .unwrap();

        assert_eq!(
            response.sections[0].products[0].purls,
            vec![Purl::from("pkg:generic/deep")]
        );
    }
}
