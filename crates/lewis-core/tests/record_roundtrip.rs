//! Wire-shape and JsonSchema validation tests for API records.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use lewis_core::entities::*;
use lewis_core::enums::SearchHitKind;
use lewis_core::{Cursor, ListFilters, Page};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    token_roundtrip,
    Token,
    Token {
        id: "bitcoin".into(),
        symbol: "BTC".into(),
        name: "Bitcoin".into(),
        price_usd: Some(64_250.5),
        change_24h: Some(-1.25),
        market_cap: Some(1.26e12),
        volume_24h: None,
        image: Some("https://s3.amazonaws.com/1ewis/btc.png".into()),
    }
);

roundtrip_and_validate!(
    article_roundtrip,
    Article,
    Article {
        id: "4821".into(),
        title: "ETF inflows hit a monthly high".into(),
        summary: Some("Spot ETFs took in record volume.".into()),
        source: Some("CoinDesk".into()),
        url: Some("https://example.com/etf".into()),
        category: Some("markets".into()),
        tags: vec!["etf".into(), "bitcoin".into()],
        image: None,
        published_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()),
    }
);

roundtrip_and_validate!(
    question_roundtrip,
    Question,
    Question {
        id: "q-17".into(),
        title: "Is staking income taxable?".into(),
        body: "Asking for a friend.".into(),
        author: None,
        tags: vec!["tax".into()],
        answer_count: 3,
        created_at: None,
    }
);

roundtrip_and_validate!(
    answer_roundtrip,
    Answer,
    Answer {
        id: "a-1".into(),
        question_id: "q-17".into(),
        body: "Depends on your jurisdiction.".into(),
        author: Some("mod".into()),
        created_at: Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()),
    }
);

roundtrip_and_validate!(
    guide_roundtrip,
    Guide,
    Guide {
        id: "g-2".into(),
        slug: Some("hardware-wallets".into()),
        title: "Choosing a hardware wallet".into(),
        summary: None,
        category: Some("security".into()),
        image: None,
        updated_at: None,
    }
);

roundtrip_and_validate!(
    comment_roundtrip,
    Comment,
    Comment {
        id: "c-1".into(),
        article_id: "4821".into(),
        author: Some("reader".into()),
        body: "Thanks!".into(),
        created_at: None,
    }
);

roundtrip_and_validate!(
    search_hit_roundtrip,
    SearchHit,
    SearchHit {
        kind: SearchHitKind::Guide,
        id: "g-2".into(),
        title: "Choosing a hardware wallet".into(),
        snippet: Some("…cold storage…".into()),
    }
);

roundtrip_and_validate!(
    page_roundtrip,
    Page<Token>,
    Page::new(
        vec![Token {
            id: "eth".into(),
            symbol: "ETH".into(),
            name: "Ether".into(),
            price_usd: None,
            change_24h: None,
            market_cap: None,
            volume_24h: None,
            image: None,
        }],
        Cursor::issued("opaque-1"),
    )
    .with_total(Some(120))
);

roundtrip_and_validate!(
    filters_roundtrip,
    ListFilters,
    ListFilters::with_limit(50).category("exchanges")
);

#[test]
fn partial_records_fall_back_to_defaults() {
    let article: Article = serde_json::from_str(r#"{"id": "1", "title": "Bare"}"#).unwrap();
    assert_eq!(article.tags, Vec::<String>::new());
    assert!(article.image.is_none());
    assert!(article.published_at.is_none());

    let question: Question = serde_json::from_str(r#"{"id": "q", "title": "T"}"#).unwrap();
    assert_eq!(question.answer_count, 0);
    assert_eq!(question.body, "");
}

#[test]
fn token_fields_use_camel_case() {
    let token: Token = serde_json::from_str(
        r#"{"id": "sol", "symbol": "SOL", "name": "Solana", "priceUsd": 150.0, "change24h": 2.5}"#,
    )
    .unwrap();
    assert_eq!(token.price_usd, Some(150.0));
    assert_eq!(token.change_24h, Some(2.5));
}
