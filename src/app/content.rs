//! Static informational text shown next to the form.

use crate::domain::model::Feature;
use std::fmt::Write as _;

pub const TITLE: &str = "🔍 Diabetes Prediction";

pub const TAGLINE: &str = "An easy application for predicting diabetes disease.";

pub const WHAT_IS_DIABETES: &str = "\
Diabetes is a chronic disease that occurs when blood sugar (glucose) levels are too high.
It happens when the body does not produce enough insulin or cannot use insulin effectively.";

pub const TYPES: &[(&str, &str)] = &[
    (
        "Type 1 Diabetes",
        "An autoimmune condition where the immune system attacks insulin-producing cells.",
    ),
    (
        "Type 2 Diabetes",
        "The most common type, occurring when the body becomes resistant to insulin.",
    ),
    (
        "Gestational Diabetes",
        "Develops during pregnancy and may disappear after childbirth.",
    ),
];

pub const RISK_FACTORS: &[&str] = &[
    "Obesity and overweight",
    "Lack of physical activity",
    "Family history of diabetes",
    "Unhealthy diet",
    "High blood pressure or cholesterol",
];

pub const PREVENTION_TIPS: &[&str] = &[
    "Eat a healthy diet rich in vegetables and fruits",
    "Exercise regularly (e.g., walking, jogging)",
    "Reduce sugar and processed food intake",
    "Maintain a healthy weight to lower risk",
    "Get regular check-ups to monitor blood sugar levels",
];

pub const INSTRUCTIONS: &str = "\
To check your diabetes risk, run `diabetes-check predict` with your measurements.
Any field you leave out counts as 0.";

/// Full text for the `about` command.
pub fn render_about() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}\n{}\n", TITLE, TAGLINE);
    let _ = writeln!(out, "🩺 What is Diabetes?\n{}\n", WHAT_IS_DIABETES);

    let _ = writeln!(out, "📌 Types of Diabetes");
    for (name, text) in TYPES {
        let _ = writeln!(out, "  🔹 {}: {}", name, text);
    }

    let _ = writeln!(out, "\n⚠️ Risk Factors for Diabetes");
    for factor in RISK_FACTORS {
        let _ = writeln!(out, "  - {}", factor);
    }

    let _ = writeln!(out, "\n💡 Tips for Diabetes Prevention & Management");
    for tip in PREVENTION_TIPS {
        let _ = writeln!(out, "  ✅ {}", tip);
    }

    let _ = writeln!(out, "\nℹ️ {}\n", INSTRUCTIONS);
    out.push_str(&render_field_guide());
    out
}

pub fn render_field_guide() -> String {
    let mut out = String::from("🔍 Input fields\n");
    for feature in Feature::ALL {
        let kind = if feature.is_integer() { "whole number" } else { "decimal" };
        let _ = writeln!(out, "  {:<26} {} ({})", feature.name(), feature.description(), kind);
    }
    out
}
