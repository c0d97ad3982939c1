//! Capability coverage of the domain value objects.
//!
//! Each value object advertises a fixed set of rendering capabilities; the
//! report stringifier relies on exactly this matrix.

use quill_core::prelude::*;

/// Which capabilities a value advertises: (display string, symbolic name, custom render).
fn advertised(value: &dyn ReportValue) -> (bool, bool, bool) {
    (
        value.as_display_string().is_some(),
        value.as_symbolic_name().is_some(),
        value.as_custom_render().is_some(),
    )
}

#[test]
fn test_capability_matrix() {
    let date = Date::from_ymd(2025, 3, 15).unwrap();
    let holidays = HolidayConvention::Target2;
    let cases: Vec<(&dyn ReportValue, (bool, bool, bool))> = vec![
        (&date, (false, false, true)),
        (&Currency::USD, (true, true, false)),
        (&AccrualBasis::Act360, (true, true, false)),
        (&BusinessDayConvention::Following, (true, true, false)),
        (&holidays, (true, false, false)),
        (&CompoundingMethod::Average, (false, true, false)),
        (&LongOrShort::Long, (false, true, true)),
        (&PayOrReceive::Receive, (false, true, false)),
    ];

    for (value, expected) in cases {
        assert_eq!(advertised(value), expected, "{}", value.type_name());
    }
}

#[test]
fn test_currency_ref_capabilities() {
    let iso = CurrencyRef::Iso(Currency::GBP);
    let unlisted = CurrencyRef::Unlisted("XAU".into());

    assert_eq!(
        iso.as_display_string().unwrap().display_string(),
        Ok("GBP".to_string())
    );
    assert!(matches!(
        unlisted.as_display_string().unwrap().display_string(),
        Err(CapabilityError::Unavailable { .. })
    ));
    assert_eq!(unlisted.code(), Some("XAU"));
    assert_eq!(
        unlisted.as_custom_render().unwrap().render(),
        Ok("XAU".to_string())
    );
}

#[test]
fn test_type_names_are_short() {
    assert_eq!(Date::from_ymd(2025, 1, 1).unwrap().type_name(), "Date");
    assert_eq!(Period::months(3).type_name(), "Period");
    assert_eq!(CurrencyRef::Iso(Currency::USD).type_name(), "CurrencyRef");
}

#[test]
fn test_rendered_forms() {
    assert_eq!(
        LongOrShort::Short.as_custom_render().unwrap().render(),
        Ok("short".to_string())
    );
    assert_eq!(
        Period::years(10).as_custom_render().unwrap().render(),
        Ok("10Y".to_string())
    );
    assert_eq!(
        HolidayConvention::Custom("CATO".into())
            .as_display_string()
            .unwrap()
            .display_string(),
        Ok("CATO".to_string())
    );
}
