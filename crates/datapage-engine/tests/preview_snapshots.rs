use datapage_engine::{QueryState, RevealState, build_reveal_link, order_downloads, truncate};
use datapage_types::{Dimension, DimensionOption, DownloadDescriptor};

fn age_dimension() -> Dimension {
    let mut options = vec![
        DimensionOption::new("-8", "Does not apply"),
        DimensionOption::new("-9", "Not stated"),
        DimensionOption::new("Total", "All ages"),
    ];
    options.extend((0..18).map(|band| {
        DimensionOption::new(
            band.to_string(),
            format!("Aged {} to {} years", band * 5, band * 5 + 4),
        )
    }));
    Dimension::new("age", "Age", options)
}

#[test]
fn test_age_preview_codes() {
    let result = truncate(&age_dimension(), &RevealState::default());
    let codes: Vec<&str> = result.options.iter().map(|o| o.code.as_str()).collect();

    assert!(result.is_truncated);
    insta::assert_json_snapshot!(codes, @r#"
    [
      "0",
      "1",
      "2",
      "8",
      "9",
      "10",
      "Total",
      "-8",
      "-9"
    ]
    "#);
}

#[test]
fn test_links_for_successive_reveals() {
    let mut query = QueryState::parse("version=2");
    let mut links = Vec::new();

    for dimension in ["time", "age", "sex"] {
        let link = build_reveal_link("/datasets/cpih01/editions/time-series", dimension, &query);
        links.push(link);
        query.append("showAll", dimension);
    }

    insta::assert_snapshot!(links.join("\n"), @r"
    /datasets/cpih01/editions/time-series?showAll=time&version=2#time
    /datasets/cpih01/editions/time-series?showAll=time&showAll=age&version=2#age
    /datasets/cpih01/editions/time-series?showAll=time&showAll=age&showAll=sex&version=2#sex
    ");
}

#[test]
fn test_download_order_for_version() {
    let downloads = vec![
        DownloadDescriptor::new("csvw", "1204", "/downloads/cpih01.csv-metadata.json"),
        DownloadDescriptor::new("csv", "4621309", "/downloads/cpih01.csv"),
        DownloadDescriptor::new("xlsx", "812004", "/downloads/cpih01.xlsx"),
    ];

    insta::assert_json_snapshot!(order_downloads(&downloads), @r#"
    [
      {
        "extension": "xlsx",
        "size": "812004",
        "uri": "/downloads/cpih01.xlsx"
      },
      {
        "extension": "csv",
        "size": "4621309",
        "uri": "/downloads/cpih01.csv"
      },
      {
        "extension": "csvw",
        "size": "1204",
        "uri": "/downloads/cpih01.csv-metadata.json"
      }
    ]
    "#);
}
