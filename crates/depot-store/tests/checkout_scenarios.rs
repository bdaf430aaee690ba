//! Checkout scenarios run end to end against the seeded in-memory store.

use chrono::NaiveDate;
use depot_core::{Brand, CheckoutRequest, CoreError, Money, Price, RentalAgreement, Tool, ToolType};
use depot_store::{Store, StoreDesk};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn desk() -> StoreDesk {
    Store::seeded().unwrap().rental_desk()
}

/// Places one order and reads the stored agreement back.
fn rent(desk: &StoreDesk, code: &str, days: i64, discount: i64, on: NaiveDate) -> RentalAgreement {
    let request = CheckoutRequest::new(code, days, discount, on);
    let id = desk.checkout_one(&request).unwrap();
    desk.order(&id).unwrap().unwrap().agreement
}

#[test]
fn jackhammer_with_discount_over_100_is_rejected() {
    let desk = desk();
    let request = CheckoutRequest::new("JAKR", 5, 101, date(2015, 9, 3));

    let err = desk.checkout_one(&request).unwrap_err();

    assert!(matches!(err, CoreError::InvalidDiscount { requested: 101 }));
    assert_eq!(err.to_string(), "Discount percent must be between 0 and 100");
    assert_eq!(desk.ledger().count().unwrap(), 0);
}

#[test]
fn ladder_over_observed_independence_day() {
    // 2020-07-04 is a Saturday, observed Friday 7/3
    let agreement = rent(&desk(), "LADW", 3, 10, date(2020, 7, 2));

    let expected = "Tool Code: LADW\n\
                    Tool Type: Ladder\n\
                    Tool Brand: Werner\n\
                    Rental Days: 3\n\
                    Checkout Date: 7/2/20\n\
                    Due Date: 7/5/20\n\
                    Daily Rental Charge: $1.99\n\
                    Charge Days: 2\n\
                    Pre-discount Amount: $3.98\n\
                    Discount Percent: 10%\n\
                    Discount Amount: $0.40\n\
                    Final Charge: $3.58";
    assert_eq!(agreement.render(), expected);
}

#[test]
fn chainsaw_charges_the_holiday_but_not_the_weekend() {
    let agreement = rent(&desk(), "CHNS", 5, 25, date(2015, 7, 2));

    assert_eq!(agreement.due_date(), date(2015, 7, 7));
    assert_eq!(agreement.charge_days(), 3);
    assert_eq!(agreement.pre_discount_amount().to_string(), "$4.47");
    // 1.1175 rounds to 1.12
    assert_eq!(agreement.discount_amount().to_string(), "$1.12");
    assert_eq!(agreement.final_charge().to_string(), "$3.35");
}

#[test]
fn dewalt_jackhammer_over_labor_day() {
    // Labor Day 2015 is 9/7
    let agreement = rent(&desk(), "JAKD", 6, 0, date(2015, 9, 3));

    assert_eq!(agreement.due_date(), date(2015, 9, 9));
    assert_eq!(agreement.charge_days(), 3);
    assert_eq!(agreement.pre_discount_amount().to_string(), "$8.97");
    assert_eq!(agreement.discount_amount().to_string(), "$0.00");
    assert_eq!(agreement.final_charge().to_string(), "$8.97");
}

#[test]
fn ridgid_jackhammer_over_holiday_week() {
    let agreement = rent(&desk(), "JAKR", 9, 0, date(2015, 7, 2));

    assert_eq!(agreement.due_date(), date(2015, 7, 11));
    assert_eq!(agreement.charge_days(), 5);
    assert_eq!(agreement.pre_discount_amount().to_string(), "$14.95");
    assert_eq!(agreement.discount_amount().to_string(), "$0.00");
    assert_eq!(agreement.final_charge().to_string(), "$14.95");
}

#[test]
fn ridgid_jackhammer_half_off_rounds_discount_up() {
    let agreement = rent(&desk(), "JAKR", 4, 50, date(2020, 7, 2));

    assert_eq!(agreement.due_date(), date(2020, 7, 6));
    assert_eq!(agreement.charge_days(), 1);
    assert_eq!(agreement.pre_discount_amount().to_string(), "$2.99");
    // 1.495 rounds to 1.50
    assert_eq!(agreement.discount_amount().to_string(), "$1.50");
    assert_eq!(agreement.final_charge().to_string(), "$1.49");
}

#[test]
fn unknown_tool_is_reported_by_code() {
    let desk = desk();
    let request = CheckoutRequest::new("XXXX", 2, 0, date(2020, 7, 2));

    let err = desk.checkout_one(&request).unwrap_err();

    assert_eq!(err.to_string(), r#"Tool with code "XXXX" not found"#);
}

#[test]
fn zero_rental_days_is_rejected() {
    let desk = desk();
    let request = CheckoutRequest::new("LADW", 0, 0, date(2020, 7, 2));

    let err = desk.checkout_one(&request).unwrap_err();

    assert_eq!(err.to_string(), "Rental days must be 1 or more days");
}

#[test]
fn batch_results_line_up_with_requests() {
    let desk = desk();
    let requests = vec![
        CheckoutRequest::new("JAKR", 5, 101, date(2015, 9, 3)),
        CheckoutRequest::new("LADW", 3, 10, date(2020, 7, 2)),
        CheckoutRequest::new("XXXX", 3, 10, date(2020, 7, 2)),
        CheckoutRequest::new("JAKD", 6, 0, date(2015, 9, 3)),
    ];

    let results = desk.checkout(&requests);

    assert!(matches!(results[0], Err(CoreError::InvalidDiscount { .. })));
    assert!(matches!(results[2], Err(CoreError::ToolNotFound(_))));

    let ladder = results[1].as_ref().unwrap();
    let jackhammer = results[3].as_ref().unwrap();
    assert_ne!(ladder, jackhammer);
    assert_eq!(
        desk.order(ladder).unwrap().unwrap().agreement.tool_code(),
        "LADW"
    );

    let placed = desk.ledger().list().unwrap();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].id, *ladder);
    assert_eq!(placed[1].id, *jackhammer);
}

#[test]
fn every_order_gets_its_own_id() {
    let desk = desk();
    let request = CheckoutRequest::new("LADW", 3, 10, date(2020, 7, 2));

    let first = desk.checkout_one(&request).unwrap();
    let second = desk.checkout_one(&request).unwrap();

    assert_ne!(first, second);
    assert_eq!(
        desk.order(&first).unwrap().unwrap().agreement,
        desk.order(&second).unwrap().unwrap().agreement
    );
}

#[test]
fn oversized_daily_charge_is_a_request_error() {
    let store = Store::seeded().unwrap();
    store
        .add_tools([Tool::new(
            "BIGX",
            ToolType::Ladder,
            Brand::Werner,
            Price::new(Money::from_cents(i64::MAX / 2), true, true, true),
        )])
        .unwrap();
    let desk = store.rental_desk();

    let request = CheckoutRequest::new("BIGX", 3, 0, date(2024, 1, 1));
    let err = desk.checkout_one(&request).unwrap_err();

    assert!(matches!(err, CoreError::ChargeOverflow { charge_days: 3, .. }));
    assert_eq!(desk.ledger().count().unwrap(), 0);

    // the desk keeps working for ordinary tools
    assert!(desk
        .checkout_one(&CheckoutRequest::new("JAKD", 6, 0, date(2015, 9, 3)))
        .is_ok());
}
