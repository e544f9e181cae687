use stock_calc_core::errors::CoreError;
use stock_calc_core::models::calculator::CalculatorInstance;
use stock_calc_core::models::display_format::DisplayFormat;
use stock_calc_core::models::field::Field;
use stock_calc_core::models::inputs::{parse_field, parse_number};
use stock_calc_core::models::mode::CalculatorMode;
use stock_calc_core::models::preferences::Preferences;
use stock_calc_core::models::results::{RenderedResult, RequiredQuantity};
use stock_calc_core::models::theme::Theme;

// ═══════════════════════════════════════════════════════════════════
//  CalculatorMode
// ═══════════════════════════════════════════════════════════════════

mod calculator_mode {
    use super::*;

    #[test]
    fn defaults_to_average_stock() {
        assert_eq!(CalculatorMode::default(), CalculatorMode::AverageStock);
    }

    #[test]
    fn keys() {
        assert_eq!(CalculatorMode::AverageStock.key(), "avgStock");
        assert_eq!(CalculatorMode::RequiredQuantity.key(), "requiredQty");
        assert_eq!(CalculatorMode::Sip.key(), "sip");
    }

    #[test]
    fn parse_from_key() {
        for mode in CalculatorMode::ALL {
            assert_eq!(mode.key().parse::<CalculatorMode>().unwrap(), mode);
        }
        assert_eq!(" SIP ".parse::<CalculatorMode>().unwrap(), CalculatorMode::Sip);
    }

    #[test]
    fn parse_unknown() {
        let err = "loan".parse::<CalculatorMode>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownMode(s) if s == "loan"));
    }

    #[test]
    fn display_is_title() {
        assert_eq!(
            CalculatorMode::RequiredQuantity.to_string(),
            "Required Quantity & Price"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DisplayFormat
// ═══════════════════════════════════════════════════════════════════

mod display_format {
    use super::*;

    #[test]
    fn defaults_to_grouped_standard() {
        assert_eq!(DisplayFormat::default(), DisplayFormat::GroupedStandard);
    }

    #[test]
    fn storage_keys_parse_back() {
        for format in DisplayFormat::ALL {
            assert_eq!(format.key().parse::<DisplayFormat>().unwrap(), format);
        }
        assert_eq!(DisplayFormat::Plain.key(), "none");
        assert_eq!(DisplayFormat::GroupedIndian.key(), "indian");
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "swiss".parse::<DisplayFormat>(),
            Err(CoreError::UnknownDisplayFormat(_))
        ));
    }

    #[test]
    fn display_shows_example() {
        assert_eq!(DisplayFormat::GroupedIndian.to_string(), "10,00,000");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Theme & Preferences
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn saved_choice_wins() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn system_decides_without_saved_choice() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn icons() {
        assert_eq!(Theme::Light.icon(), "🌞");
        assert_eq!(Theme::Dark.icon(), "🌙");
    }

    #[test]
    fn parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("sepia".parse::<Theme>(), Err(CoreError::UnknownTheme(_))));
    }

    #[test]
    fn preferences_for_system() {
        let prefs = Preferences::for_system(true);
        assert_eq!(prefs.display_format, DisplayFormat::GroupedStandard);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(!prefs.theme_explicit);
    }

    #[test]
    fn preferences_serde_json() {
        let prefs = Preferences {
            display_format: DisplayFormat::GroupedIndian,
            theme: Theme::Dark,
            theme_explicit: true,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, back);
    }

    #[test]
    fn preferences_missing_explicit_flag_defaults_false() {
        let json = r#"{"display_format":"Plain","theme":"Light"}"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.display_format, DisplayFormat::Plain);
        assert!(!prefs.theme_explicit);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Field
// ═══════════════════════════════════════════════════════════════════

mod field {
    use super::*;

    #[test]
    fn every_mode_has_four_fields() {
        for mode in CalculatorMode::ALL {
            let fields = Field::for_mode(mode);
            assert_eq!(fields.len(), 4);
            assert!(fields.iter().all(|f| f.mode() == mode));
        }
        assert_eq!(Field::all().count(), 12);
    }

    #[test]
    fn keys_are_unique_and_parse_back() {
        let mut keys: Vec<&str> = Field::all().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 12);

        for field in Field::all() {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn required_mode_keys_carry_suffix() {
        assert_eq!(Field::OldQtyReq.key(), "oldQtyReq");
        assert_eq!(Field::OldQty.key(), "oldQty");
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!("price".parse::<Field>(), Err(CoreError::UnknownField(_))));
    }

    #[test]
    fn labels_and_help_present() {
        for field in Field::all() {
            assert!(!field.label().is_empty());
            assert!(!field.help().is_empty());
        }
        assert_eq!(Field::NewQty.label(), "Quantity to Buy");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  parse_field
// ═══════════════════════════════════════════════════════════════════

mod parse_field_coercion {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_field("100"), 100.0);
        assert_eq!(parse_field("107.5"), 107.5);
        assert_eq!(parse_field("-3.25"), -3.25);
        assert_eq!(parse_field("+4"), 4.0);
    }

    #[test]
    fn empty_and_garbage_are_zero() {
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("   "), 0.0);
        assert_eq!(parse_field("abc"), 0.0);
        assert_eq!(parse_field("."), 0.0);
        assert_eq!(parse_field("-"), 0.0);
    }

    #[test]
    fn uses_leading_numeric_prefix() {
        assert_eq!(parse_field("  12.5abc"), 12.5);
        assert_eq!(parse_field("7 shares"), 7.0);
        assert_eq!(parse_field("1,000"), 1.0);
    }

    #[test]
    fn partial_decimals() {
        assert_eq!(parse_field("5."), 5.0);
        assert_eq!(parse_field(".5"), 0.5);
    }

    #[test]
    fn exponents() {
        assert_eq!(parse_field("1e3"), 1000.0);
        assert_eq!(parse_field("2.5E-1"), 0.25);
        assert_eq!(parse_field("5e"), 5.0);
        assert_eq!(parse_field("5e+"), 5.0);
    }

    #[test]
    fn non_finite_is_zero() {
        assert_eq!(parse_field("1e400"), 0.0);
        assert_eq!(parse_field("NaN"), 0.0);
        assert_eq!(parse_field("Infinity"), 0.0);
    }

    #[test]
    fn parse_number_distinguishes_missing_from_zero() {
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("  42x"), Some(42.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn negative_zero_normalised() {
        let v = parse_field("-0");
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CalculatorInstance
// ═══════════════════════════════════════════════════════════════════

mod calculator_instance {
    use super::*;

    #[test]
    fn new_instance_defaults() {
        let calc = CalculatorInstance::new(2);
        assert_eq!(calc.id, 2);
        assert_eq!(calc.mode, CalculatorMode::AverageStock);
        assert!(calc.is_empty());
        assert_eq!(calc.title(), "Calculator 2");
    }

    #[test]
    fn set_and_read_fields() {
        let mut calc = CalculatorInstance::new(1);
        calc.set_field(Field::OldAvgPrice, "100");
        calc.set_field(Field::OldQty, "50abc");
        assert_eq!(calc.field_text(Field::OldAvgPrice), "100");
        assert_eq!(calc.field_value(Field::OldQty), 50.0);
        assert_eq!(calc.field_value(Field::NewPrice), 0.0);
        assert_eq!(calc.field_text(Field::NewPrice), "");
    }

    #[test]
    fn empty_text_clears_field() {
        let mut calc = CalculatorInstance::new(1);
        calc.set_field(Field::Years, "10");
        calc.set_field(Field::Years, "");
        assert!(calc.is_empty());
    }

    #[test]
    fn switching_mode_keeps_values() {
        let mut calc = CalculatorInstance::new(1);
        calc.set_field(Field::OldAvgPrice, "100");
        calc.mode = CalculatorMode::Sip;
        calc.set_field(Field::Years, "10");
        calc.mode = CalculatorMode::AverageStock;
        assert_eq!(calc.field_text(Field::OldAvgPrice), "100");
        assert_eq!(calc.field_text(Field::Years), "10");
    }

    #[test]
    fn reset_clears_all_modes_but_keeps_mode() {
        let mut calc = CalculatorInstance::new(1);
        calc.mode = CalculatorMode::RequiredQuantity;
        calc.set_field(Field::OldAvgPrice, "100");
        calc.set_field(Field::TargetAvgPrice, "105");
        calc.reset();
        assert!(calc.is_empty());
        assert_eq!(calc.mode, CalculatorMode::RequiredQuantity);
    }

    #[test]
    fn next_field_walks_section() {
        let calc = CalculatorInstance::new(1);
        assert_eq!(calc.next_field(Field::OldAvgPrice), Some(Field::OldQty));
        assert_eq!(calc.next_field(Field::NewPrice), Some(Field::NewQty));
        assert_eq!(calc.next_field(Field::NewQty), None);
        assert_eq!(calc.next_field(Field::TargetAvgPrice), Some(Field::OldQtyReq));
        assert_eq!(calc.next_field(Field::Years), None);
    }

    #[test]
    fn typed_inputs() {
        let mut calc = CalculatorInstance::new(1);
        calc.set_field(Field::TargetAvgPrice, "105");
        calc.set_field(Field::OldQtyReq, "100");
        calc.set_field(Field::OldAvgPriceReq, "100");
        calc.set_field(Field::NewPriceReq, "110");
        let inputs = calc.required_quantity_inputs();
        assert_eq!(inputs.target_avg_price, 105.0);
        assert_eq!(inputs.old_qty, 100.0);
        assert_eq!(inputs.old_avg_price, 100.0);
        assert_eq!(inputs.new_price, 110.0);

        calc.set_field(Field::MonthlySip, "5000");
        calc.set_field(Field::AnnualReturn, "12");
        let sip = calc.sip_inputs();
        assert_eq!(sip.monthly_sip, 5000.0);
        assert_eq!(sip.annual_return_percent, 12.0);
        assert_eq!(sip.current_corpus, 0.0);
    }

    #[test]
    fn serde_json_keeps_values() {
        let mut calc = CalculatorInstance::new(3);
        calc.mode = CalculatorMode::Sip;
        calc.set_field(Field::CurrentCorpus, "100000");
        let json = serde_json::to_string(&calc).unwrap();
        let back: CalculatorInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(calc, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Results
// ═══════════════════════════════════════════════════════════════════

mod results {
    use super::*;

    #[test]
    fn solved_accessors() {
        let r = RequiredQuantity::Solved {
            quantity: 100.0,
            total_price: 11_000.0,
        };
        assert_eq!(r.quantity(), Some(100.0));
        assert_eq!(r.total_price(), 11_000.0);
        assert_eq!(r.sentinel_label(), None);
    }

    #[test]
    fn sentinels_report_zero_total() {
        assert_eq!(RequiredQuantity::Invalid.quantity(), None);
        assert_eq!(RequiredQuantity::Invalid.total_price(), 0.0);
        assert_eq!(RequiredQuantity::Invalid.sentinel_label(), Some("Invalid"));
        assert_eq!(RequiredQuantity::NotPossible.total_price(), 0.0);
        assert_eq!(
            RequiredQuantity::NotPossible.sentinel_label(),
            Some("Not possible")
        );
    }

    #[test]
    fn rendered_result_lookup() {
        let rendered = RenderedResult {
            lines: vec![("Gains".to_string(), "1.00".to_string())],
        };
        assert_eq!(rendered.get("Gains"), Some("1.00"));
        assert_eq!(rendered.get("Future Value"), None);
    }
}
