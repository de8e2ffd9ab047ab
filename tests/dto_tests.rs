use oddsboard_rs::dto::*;
use serde_json::{from_value, json, to_value};

#[test]
fn test_bet_list_deserialization() {
    let bets: Vec<Bet> = from_value(json!([
        {
            "matchId": "241019183512",
            "outcomeName": "Dragon",
            "outcomeId": "dt-dragon",
            "category": "back",
            "stake": 500,
            "rate": 1.98
        },
        {
            "matchId": "241019183512",
            "outcomeName": "Tiger",
            "category": "LAY",
            "stake": "250",
            "rate": "2.02",
            "settlement": { "settled": true, "status": "won", "profitLoss": 250 }
        }
    ]))
    .unwrap();

    assert_eq!(bets.len(), 2);
    assert_eq!(bets[0].outcome_id.as_deref(), Some("dt-dragon"));
    assert_eq!(bets[0].category, Side::Back);
    assert_eq!(bets[1].category, Side::Lay);
    assert_eq!(bets[1].stake, 250.0);
    assert_eq!(bets[1].rate, 2.02);

    let settlement = bets[1].settled().unwrap();
    assert_eq!(settlement.status, SettlementStatus::Won);
    assert_eq!(settlement.realized(), 250.0);
}

#[test]
fn test_bet_serialization_uses_camel_case() {
    let bet = Bet::lay("r-1", "Even", 10.0, 1.95).with_outcome_id("oe-even");
    let value = to_value(&bet).unwrap();

    assert_eq!(value["matchId"], json!("r-1"));
    assert_eq!(value["outcomeName"], json!("Even"));
    assert_eq!(value["outcomeId"], json!("oe-even"));
    assert_eq!(value["category"], json!("lay"));
    assert_eq!(value["stake"], json!(10.0));
    assert!(value.get("settlement").is_none());
}

#[test]
fn test_unknown_category_is_rejected() {
    let result: Result<Bet, _> = from_value(json!({
        "matchId": "r-1",
        "outcomeName": "Dragon",
        "category": "each-way",
        "stake": 10,
        "rate": 2
    }));
    assert!(result.is_err());
}

#[test]
fn test_garbage_profit_loss_counts_as_zero() {
    let settlement: Settlement = from_value(json!({
        "settled": "true",
        "status": "Lost",
        "profitLoss": "-"
    }))
    .unwrap();

    assert!(settlement.settled);
    assert_eq!(settlement.realized(), 0.0);
}

#[test]
fn test_odds_snapshot_deserialization() {
    let snapshot: OddsSnapshot = from_value(json!({
        "matchId": "r-9",
        "outcomes": [
            { "id": "l7-low", "label": "Low Card", "status": "OPEN", "back": 2.0, "lay": "2.1", "min": 100, "max": "25000" },
            { "label": "High Card", "status": "suspended", "back": null }
        ]
    }))
    .unwrap();

    assert_eq!(snapshot.match_id, "r-9");
    assert_eq!(snapshot.outcomes.len(), 2);

    let low = &snapshot.outcomes[0];
    assert_eq!(low.lay, Some(2.1));
    assert_eq!(low.min, Some(100.0));
    assert_eq!(low.max, Some(25000.0));
    assert_eq!(low.state().unwrap().status, MarketStatus::Open);

    let high = &snapshot.outcomes[1];
    assert_eq!(high.back, None);
    assert_eq!(high.state().unwrap().status, MarketStatus::Suspended);
}
