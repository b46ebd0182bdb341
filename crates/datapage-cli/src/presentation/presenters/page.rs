use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, DimensionViewModel, DownloadViewModel, Guidance, OptionViewModel,
    PageViewModel, RevealLinkResultViewModel, RevealLinkViewModel, StatusBadge,
};
use datapage_engine::{
    QueryState, RequestTarget, RevealState, TRUNCATION_THRESHOLD, build_reveal_link,
    order_dimensions, order_downloads, reveal_action, truncate, unsupported_downloads,
};
use datapage_types::{Dimension, DownloadDescriptor, PageInput};
use tracing::{debug, warn};

pub fn present_page(
    input: PageInput,
    target: &RequestTarget,
    config: &Config,
) -> CommandResultViewModel<PageViewModel> {
    let reveal_state = RevealState::from_query(&target.query);

    for dropped in unsupported_downloads(&input.downloads) {
        warn!(
            dataset = %input.id,
            extension = %dropped.extension,
            "download format not in display order, skipping"
        );
    }

    let downloads = order_downloads(&input.downloads)
        .iter()
        .map(|d| present_download(d, config))
        .collect();

    let dimensions: Vec<DimensionViewModel> = order_dimensions(input.dimensions)
        .iter()
        .map(|d| present_dimension(d, target, &reveal_state))
        .collect();

    let truncated_ids: Vec<&str> = dimensions
        .iter()
        .filter(|d| d.is_truncated)
        .map(|d| d.id.as_str())
        .collect();

    let badge = if dimensions.is_empty() {
        StatusBadge::warning("No dimensions")
    } else {
        StatusBadge::info(format!(
            "{} dimension(s), {} truncated",
            dimensions.len(),
            truncated_ids.len()
        ))
    };

    let suggestion = truncated_ids.first().map(|id| {
        Guidance::new("Show every option of a truncated dimension").with_command(format!(
            "datapage reveal --url '{}' --dimension {}",
            request_target_string(target),
            id
        ))
    });

    let content = PageViewModel {
        dataset_id: input.id,
        title: input.title,
        description: input.description,
        language: config.site.language.clone(),
        path: target.path.clone(),
        dimensions,
        downloads,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if let Some(guide) = suggestion {
        result = result.with_suggestion(guide);
    }
    result
}

pub fn present_reveal_link(
    target: &RequestTarget,
    dimension_id: &str,
) -> CommandResultViewModel<RevealLinkResultViewModel> {
    CommandResultViewModel::new(RevealLinkResultViewModel {
        dimension_id: dimension_id.to_string(),
        action: reveal_action(dimension_id, &target.query).into(),
        href: build_reveal_link(&target.path, dimension_id, &target.query),
    })
}

fn present_dimension(
    dimension: &Dimension,
    target: &RequestTarget,
    reveal_state: &RevealState,
) -> DimensionViewModel {
    let preview = truncate(dimension, reveal_state);

    // Revealed dimensions that would otherwise be truncated get a collapse link
    let collapsible = !preview.is_truncated
        && reveal_state.contains(&dimension.id)
        && dimension.total_items > TRUNCATION_THRESHOLD
        && !dimension.is_area_type();

    let reveal_link = (preview.is_truncated || collapsible).then(|| RevealLinkViewModel {
        action: reveal_action(&dimension.id, &target.query).into(),
        href: build_reveal_link(&target.path, &dimension.id, &target.query),
    });

    let hidden_count = if preview.is_truncated {
        dimension.total_items.saturating_sub(preview.options.len())
    } else {
        0
    };

    debug!(
        dimension = %dimension.id,
        total = dimension.total_items,
        shown = preview.options.len(),
        truncated = preview.is_truncated,
        "mapped dimension"
    );

    DimensionViewModel {
        id: dimension.id.clone(),
        label: dimension.label.clone(),
        is_area_type: dimension.is_area_type(),
        total_items: dimension.total_items,
        options: preview
            .options
            .into_iter()
            .map(|o| OptionViewModel {
                code: o.code,
                label: o.label,
            })
            .collect(),
        is_truncated: preview.is_truncated,
        hidden_count,
        reveal_link,
    }
}

fn present_download(download: &DownloadDescriptor, config: &Config) -> DownloadViewModel {
    DownloadViewModel {
        extension: download.normalized_extension(),
        size_bytes: download.size.trim().parse().ok(),
        size_raw: download.size.clone(),
        uri: config.downloads.resolve_uri(&download.uri),
    }
}

fn request_target_string(target: &RequestTarget) -> String {
    let query = target.query.encode();
    if query.is_empty() {
        target.path.clone()
    } else {
        format!("{}?{}", target.path, query)
    }
}

/// Target used when the caller does not supply one
pub fn default_target(dataset_id: &str) -> RequestTarget {
    RequestTarget {
        path: format!("/datasets/{}", dataset_id),
        query: QueryState::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DownloadConfig;
    use datapage_types::{DimensionKind, DimensionOption};

    fn numbered_dimension(id: &str, count: usize) -> Dimension {
        let options = (1..=count)
            .map(|i| DimensionOption::new(i.to_string(), format!("Option {}", i)))
            .collect();
        Dimension::new(id, id.to_uppercase(), options)
    }

    fn sample_input() -> PageInput {
        PageInput {
            id: "cpih01".to_string(),
            title: "Consumer Prices".to_string(),
            description: None,
            dimensions: vec![
                numbered_dimension("time", 21),
                numbered_dimension("aggregate", 4),
                numbered_dimension("geography", 30).with_kind(DimensionKind::Area),
            ],
            downloads: vec![
                DownloadDescriptor::new("csv", "4621309", "/downloads/cpih01.csv"),
                DownloadDescriptor::new("json", "12", "/downloads/cpih01.json"),
                DownloadDescriptor::new("XLSX", "unknown", "https://cdn.example/cpih01.xlsx"),
            ],
        }
    }

    #[test]
    fn test_area_dimension_first_and_complete() {
        let target = RequestTarget::parse("/datasets/cpih01");
        let result = present_page(sample_input(), &target, &Config::default());
        let page = &result.content;

        let ids: Vec<&str> = page.dimensions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["geography", "time", "aggregate"]);

        let geography = &page.dimensions[0];
        assert!(geography.is_area_type);
        assert!(!geography.is_truncated);
        assert_eq!(geography.options.len(), 30);
        assert!(geography.reveal_link.is_none());
    }

    #[test]
    fn test_truncated_dimension_has_reveal_link() {
        let target = RequestTarget::parse("/datasets/cpih01?showAll=other");
        let result = present_page(sample_input(), &target, &Config::default());
        let time = &result.content.dimensions[1];

        assert!(time.is_truncated);
        assert_eq!(time.options.len(), 9);
        assert_eq!(time.hidden_count, 12);

        let link = time.reveal_link.as_ref().unwrap();
        assert_eq!(link.action, crate::presentation::view_models::RevealLinkAction::Reveal);
        assert_eq!(link.href, "/datasets/cpih01?showAll=other&showAll=time#time");

        let short = &result.content.dimensions[2];
        assert!(!short.is_truncated);
        assert!(short.reveal_link.is_none());
    }

    #[test]
    fn test_revealed_dimension_gets_collapse_link() {
        let target = RequestTarget::parse("/datasets/cpih01?showAll=time");
        let result = present_page(sample_input(), &target, &Config::default());
        let time = &result.content.dimensions[1];

        assert!(!time.is_truncated);
        assert_eq!(time.options.len(), 21);
        assert_eq!(time.hidden_count, 0);

        let link = time.reveal_link.as_ref().unwrap();
        assert_eq!(
            link.action,
            crate::presentation::view_models::RevealLinkAction::Collapse
        );
        assert_eq!(link.href, "/datasets/cpih01#time");
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_downloads_ordered_and_resolved() {
        let config = Config {
            downloads: DownloadConfig {
                base_url: Some("https://download.example".to_string()),
            },
            ..Config::default()
        };
        let target = RequestTarget::parse("/datasets/cpih01");
        let result = present_page(sample_input(), &target, &config);
        let downloads = &result.content.downloads;

        assert_eq!(downloads.len(), 2);
        assert_eq!(downloads[0].extension, "xlsx");
        assert_eq!(downloads[0].size_bytes, None);
        assert_eq!(downloads[0].uri, "https://cdn.example/cpih01.xlsx");
        assert_eq!(downloads[1].extension, "csv");
        assert_eq!(downloads[1].size_bytes, Some(4621309));
        assert_eq!(downloads[1].uri, "https://download.example/downloads/cpih01.csv");
    }

    #[test]
    fn test_badge_and_suggestion() {
        let target = RequestTarget::parse("/datasets/cpih01?lang=cy");
        let result = present_page(sample_input(), &target, &Config::default());

        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.label, "3 dimension(s), 1 truncated");

        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("datapage reveal --url '/datasets/cpih01?lang=cy' --dimension time")
        );
    }

    #[test]
    fn test_empty_page() {
        let input = PageInput {
            id: "empty".to_string(),
            title: "Empty".to_string(),
            description: None,
            dimensions: vec![],
            downloads: vec![],
        };
        let result = present_page(input, &default_target("empty"), &Config::default());

        assert_eq!(result.content.path, "/datasets/empty");
        assert!(result.content.dimensions.is_empty());
        assert!(result.content.downloads.is_empty());
        assert_eq!(result.badge.as_ref().unwrap().label, "No dimensions");
    }

    #[test]
    fn test_reveal_link_result() {
        let target = RequestTarget::parse("/datasets/1?showAll=dim_2");
        let result = present_reveal_link(&target, "dim_1");

        assert_eq!(result.content.href, "/datasets/1?showAll=dim_2&showAll=dim_1#dim_1");
    }
}
