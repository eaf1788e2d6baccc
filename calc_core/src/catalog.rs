//! # Calculator Catalog
//!
//! The static directory: five categories and one descriptor per calculator.
//! Descriptors are defined at build time and never mutated; lookups go
//! through slug maps built on first use.
//!
//! ```rust
//! use calc_core::catalog::{self, CategorySlug};
//!
//! let bmi = catalog::find_calculator("bmi").unwrap();
//! assert_eq!(bmi.category, CategorySlug::Health);
//! assert!(catalog::in_category(CategorySlug::Math).count() >= 10);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;

// ============================================================================
// Categories
// ============================================================================

/// One of the five top-level sections of the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySlug {
    Math,
    Finance,
    Health,
    Gaming,
    Science,
}

impl CategorySlug {
    pub const ALL: [CategorySlug; 5] = [
        CategorySlug::Math,
        CategorySlug::Finance,
        CategorySlug::Health,
        CategorySlug::Gaming,
        CategorySlug::Science,
    ];

    pub fn as_str(self) -> &'static str {
        self.descriptor().slug
    }

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        match self {
            CategorySlug::Math => &CATEGORIES[0],
            CategorySlug::Finance => &CATEGORIES[1],
            CategorySlug::Health => &CATEGORIES[2],
            CategorySlug::Gaming => &CATEGORIES[3],
            CategorySlug::Science => &CATEGORIES[4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub category: CategorySlug,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub static CATEGORIES: [CategoryDescriptor; 5] = [
    CategoryDescriptor {
        category: CategorySlug::Math,
        name: "Math",
        slug: "math",
        description: "Coordinate conversions, algebra, calculus and statistics calculators.",
    },
    CategoryDescriptor {
        category: CategorySlug::Finance,
        name: "Finance",
        slug: "finance",
        description: "Interest, loans, savings, wages and everyday money calculators.",
    },
    CategoryDescriptor {
        category: CategorySlug::Health,
        name: "Health",
        slug: "health",
        description: "Body composition, nutrition, fitness and pregnancy calculators.",
    },
    CategoryDescriptor {
        category: CategorySlug::Gaming,
        name: "Gaming",
        slug: "gaming",
        description: "Dice odds, damage, ratings, experience curves and loot drop calculators.",
    },
    CategoryDescriptor {
        category: CategorySlug::Science,
        name: "Science",
        slug: "science",
        description: "Unit conversions, electricity, mechanics and chemistry calculators.",
    },
];

// ============================================================================
// Calculators
// ============================================================================

/// Everything the directory knows about one calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorDescriptor {
    pub id: u32,
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Accent color, `#rrggbb`
    pub color: &'static str,
    pub category: CategorySlug,
    pub keywords: &'static [&'static str],
    pub kind: CalculatorKind,
}

impl CalculatorDescriptor {
    /// Full path, e.g. `/health/bmi`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.category.as_str(), self.slug)
    }
}

const MATH: &str = "#3b82f6";
const FINANCE: &str = "#10b981";
const HEALTH: &str = "#ef4444";
const GAMING: &str = "#8b5cf6";
const SCIENCE: &str = "#f59e0b";

macro_rules! calculator {
    ($id:expr, $kind:ident, $slug:expr, $title:expr, $category:ident, $color:expr, $icon:expr, $description:expr, [$($keyword:expr),* $(,)?]) => {
        CalculatorDescriptor {
            id: $id,
            title: $title,
            slug: $slug,
            description: $description,
            icon: $icon,
            color: $color,
            category: CategorySlug::$category,
            keywords: &[$($keyword),*],
            kind: CalculatorKind::$kind,
        }
    };
}

/// Every calculator, in directory order
pub static CALCULATORS: &[CalculatorDescriptor] = &[
    // Math
    calculator!(1, CartesianToPolar, "cartesian-to-polar", "Cartesian to Polar Converter", Math, MATH, "🧭",
        "Convert (x, y) coordinates to polar form: radius and angle in degrees.",
        ["cartesian", "polar", "coordinates", "atan2"]),
    calculator!(2, PolarToCartesian, "polar-to-cartesian", "Polar to Cartesian Converter", Math, MATH, "📐",
        "Convert a radius and angle back to (x, y) coordinates.",
        ["polar", "cartesian", "coordinates", "trigonometry"]),
    calculator!(3, CircumferenceToDiameter, "circumference-to-diameter", "Circumference to Diameter", Math, MATH, "⭕",
        "Find a circle's diameter, radius and area from its circumference.",
        ["circle", "circumference", "diameter", "pi"]),
    calculator!(4, RiemannSum, "riemann-sum", "Riemann Sum Calculator", Math, MATH, "∫",
        "Approximate a definite integral with left, right, midpoint or trapezoidal sums.",
        ["riemann", "integral", "calculus", "trapezoidal"]),
    calculator!(5, Jacobian, "jacobian", "Jacobian Matrix Calculator", Math, MATH, "🔢",
        "Symbolic partial derivatives, the numeric Jacobian matrix and its determinant.",
        ["jacobian", "partial derivative", "matrix", "determinant"]),
    calculator!(6, Convolution, "convolution", "Discrete Convolution Calculator", Math, MATH, "〰",
        "Full discrete convolution of two number sequences.",
        ["convolution", "signal", "kernel", "sequence"]),
    calculator!(7, QuadraticEquation, "quadratic-equation", "Quadratic Equation Solver", Math, MATH, "𝑥²",
        "Solve ax² + bx + c = 0 for real or complex roots and find the vertex.",
        ["quadratic", "roots", "discriminant", "parabola"]),
    calculator!(8, Percentage, "percentage", "Percentage Calculator", Math, MATH, "%",
        "Percent of a number, what percent one number is of another, and percent change.",
        ["percent", "percentage", "percent change"]),
    calculator!(9, Pythagorean, "pythagorean-theorem", "Pythagorean Theorem Calculator", Math, MATH, "📏",
        "Hypotenuse of a right triangle from its two legs.",
        ["pythagorean", "hypotenuse", "right triangle"]),
    calculator!(10, Logarithm, "logarithm", "Logarithm Calculator", Math, MATH, "㏒",
        "Logarithm of a value in any base, with natural and common logs.",
        ["logarithm", "log", "ln", "exponent"]),
    calculator!(11, CombinationsPermutations, "combinations-permutations", "Combinations & Permutations", Math, MATH, "🎲",
        "Count the ways to choose or arrange r items from n.",
        ["combinations", "permutations", "ncr", "npr", "factorial"]),
    calculator!(12, GcdLcm, "gcd-lcm", "GCD & LCM Calculator", Math, MATH, "➗",
        "Greatest common divisor and least common multiple of a list of integers.",
        ["gcd", "lcm", "divisor", "multiple"]),
    calculator!(13, DistanceMidpointSlope, "distance-midpoint-slope", "Distance, Midpoint & Slope", Math, MATH, "📍",
        "Distance, midpoint and slope between two points.",
        ["distance", "midpoint", "slope", "coordinate geometry"]),
    calculator!(14, TriangleArea, "triangle-area", "Triangle Area (Heron's Formula)", Math, MATH, "🔺",
        "Area and perimeter of a triangle from its three sides.",
        ["triangle", "area", "heron", "perimeter"]),
    calculator!(15, DescriptiveStatistics, "descriptive-statistics", "Descriptive Statistics", Math, MATH, "📊",
        "Mean, median, mode, range and standard deviation of a data set.",
        ["statistics", "mean", "median", "standard deviation"]),
    // Finance
    calculator!(16, CdLadder, "cd-ladder", "CD Ladder Calculator", Finance, FINANCE, "🪜",
        "Split a deposit across certificates of deposit with staggered terms.",
        ["cd ladder", "certificate of deposit", "apy", "savings"]),
    calculator!(17, CompoundInterest, "compound-interest", "Compound Interest Calculator", Finance, FINANCE, "📈",
        "Grow a principal with compounding and optional monthly contributions.",
        ["compound interest", "savings", "investment growth"]),
    calculator!(18, SimpleInterest, "simple-interest", "Simple Interest Calculator", Finance, FINANCE, "💵",
        "Interest earned on a principal at a flat annual rate.",
        ["simple interest", "interest", "principal"]),
    calculator!(19, LoanPayment, "loan-payment", "Loan Payment Calculator", Finance, FINANCE, "🏦",
        "Monthly payment, total interest and a first-year amortization schedule.",
        ["loan", "mortgage", "amortization", "monthly payment"]),
    calculator!(20, ReturnOnInvestment, "roi", "ROI Calculator", Finance, FINANCE, "💹",
        "Return on investment, with an annualized rate when a holding period is given.",
        ["roi", "return on investment", "annualized return"]),
    calculator!(21, Inflation, "inflation", "Inflation Calculator", Finance, FINANCE, "🎈",
        "Future cost and purchasing power of money under steady inflation.",
        ["inflation", "purchasing power", "cost of living"]),
    calculator!(22, Tip, "tip", "Tip Calculator", Finance, FINANCE, "🧾",
        "Tip, total and per-person share of a bill.",
        ["tip", "gratuity", "split bill"]),
    calculator!(23, SalesTax, "sales-tax", "Sales Tax Calculator", Finance, FINANCE, "🏷",
        "Sales tax and total price from a pre-tax amount.",
        ["sales tax", "vat", "price"]),
    calculator!(24, ArkansasChildSupport, "arkansas-child-support", "Arkansas Child Support Estimator", Finance, FINANCE, "👪",
        "Simplified percentage-of-income child support estimate for Arkansas.",
        ["child support", "arkansas", "family law"]),
    calculator!(25, WaspiCompensation, "waspi-compensation", "WASPI Compensation Estimator", Finance, FINANCE, "👵",
        "Eligibility and indicative compensation for women affected by State Pension age changes.",
        ["waspi", "state pension", "compensation", "uk"]),
    calculator!(26, HourlyWage, "hourly-wage", "Hourly Wage Calculator", Finance, FINANCE, "⏱",
        "Convert an annual salary to hourly, weekly and monthly pay.",
        ["salary", "hourly wage", "pay"]),
    // Health
    calculator!(27, ArmyBodyFat, "army-body-fat", "Army Body Fat Calculator", Health, HEALTH, "🎖",
        "U.S. Army circumference method body fat percentage.",
        ["army body fat", "body fat", "tape test"]),
    calculator!(28, BodyMassIndex, "bmi", "BMI Calculator", Health, HEALTH, "⚖",
        "Body mass index with WHO weight category and healthy weight range.",
        ["bmi", "body mass index", "weight"]),
    calculator!(29, BasalMetabolicRate, "bmr", "BMR Calculator", Health, HEALTH, "🔥",
        "Basal metabolic rate using the Mifflin-St Jeor equation.",
        ["bmr", "basal metabolic rate", "mifflin"]),
    calculator!(30, CalorieNeeds, "calorie-needs", "Calorie Needs Calculator", Health, HEALTH, "🍎",
        "Daily calories to maintain, lose or gain weight for an activity level.",
        ["calories", "tdee", "diet", "maintenance"]),
    calculator!(31, IdealWeight, "ideal-weight", "Ideal Weight Calculator", Health, HEALTH, "🧍",
        "Ideal body weight by the Devine, Robinson, Miller and Hamwi formulas.",
        ["ideal weight", "devine", "hamwi"]),
    calculator!(32, WaterIntake, "water-intake", "Water Intake Calculator", Health, HEALTH, "💧",
        "Daily water target from body weight and exercise.",
        ["water intake", "hydration"]),
    calculator!(33, TargetHeartRate, "target-heart-rate", "Target Heart Rate Calculator", Health, HEALTH, "❤",
        "Training heart rate zones using the Karvonen method.",
        ["heart rate", "karvonen", "training zones"]),
    calculator!(34, DueDate, "due-date", "Pregnancy Due Date Calculator", Health, HEALTH, "🤰",
        "Estimated due date and gestational age from the last menstrual period.",
        ["due date", "pregnancy", "gestational age"]),
    calculator!(35, WaistToHipRatio, "waist-to-hip-ratio", "Waist-to-Hip Ratio Calculator", Health, HEALTH, "📐",
        "Waist-to-hip ratio and the associated health risk band.",
        ["waist to hip", "whr", "health risk"]),
    // Gaming
    calculator!(36, DiceProbability, "dice-probability", "Dice Probability Calculator", Gaming, GAMING, "🎲",
        "Odds of rolling exactly, at least or at most a total with several dice.",
        ["dice", "probability", "tabletop", "d20"]),
    calculator!(37, DamagePerSecond, "dps", "DPS Calculator", Gaming, GAMING, "⚔",
        "Damage per second including critical hits.",
        ["dps", "damage per second", "crit"]),
    calculator!(38, EloRating, "elo-rating", "Elo Rating Calculator", Gaming, GAMING, "🏆",
        "Expected score and rating change after a match.",
        ["elo", "rating", "chess", "matchmaking"]),
    calculator!(39, KdRatio, "kd-ratio", "K/D Ratio Calculator", Gaming, GAMING, "🎯",
        "Kill/death and KDA ratios, and kills needed for the next whole ratio.",
        ["kd ratio", "kda", "fps"]),
    calculator!(40, XpToLevel, "xp-to-level", "XP to Level Calculator", Gaming, GAMING, "⭐",
        "Experience required to reach a target level on a power curve.",
        ["xp", "experience", "level up", "grind"]),
    calculator!(41, DropChance, "drop-chance", "Drop Chance Calculator", Gaming, GAMING, "💎",
        "Chance of at least one drop and attempts needed for common confidence levels.",
        ["drop rate", "loot", "probability"]),
    // Science
    calculator!(42, MmToInches, "mm-to-inches", "Millimeters to Inches", Science, SCIENCE, "📏",
        "Convert millimeters to inches, centimeters and feet.",
        ["mm to inches", "millimeters", "unit conversion"]),
    calculator!(43, TemperatureConverter, "temperature-converter", "Temperature Converter", Science, SCIENCE, "🌡",
        "Convert between Celsius, Fahrenheit and Kelvin.",
        ["temperature", "celsius", "fahrenheit", "kelvin"]),
    calculator!(44, OhmsLaw, "ohms-law", "Ohm's Law Calculator", Science, SCIENCE, "⚡",
        "Solve for voltage, current or resistance and the power dissipated.",
        ["ohms law", "voltage", "current", "resistance"]),
    calculator!(45, SpeedDistanceTime, "speed-distance-time", "Speed, Distance & Time", Science, SCIENCE, "🏃",
        "Average speed in several units and running pace.",
        ["speed", "distance", "time", "pace"]),
    calculator!(46, KineticEnergy, "kinetic-energy", "Kinetic Energy Calculator", Science, SCIENCE, "🚗",
        "Kinetic energy and momentum of a moving mass.",
        ["kinetic energy", "momentum", "physics"]),
    calculator!(47, Density, "density", "Density Calculator", Science, SCIENCE, "🧱",
        "Density from mass and volume, and whether it floats in water.",
        ["density", "mass", "volume"]),
    calculator!(48, HalfLife, "half-life", "Half-Life Calculator", Science, SCIENCE, "☢",
        "Amount remaining after radioactive decay.",
        ["half life", "radioactive decay", "decay constant"]),
    calculator!(49, Ph, "ph", "pH Calculator", Science, SCIENCE, "🧪",
        "pH, pOH and hydroxide concentration from hydrogen-ion concentration.",
        ["ph", "acidity", "chemistry"]),
    calculator!(50, Molarity, "molarity", "Molarity Calculator", Science, SCIENCE, "⚗",
        "Molar concentration of a solution.",
        ["molarity", "concentration", "moles"]),
    calculator!(51, WavelengthFrequency, "wavelength-frequency", "Wavelength & Frequency", Science, SCIENCE, "🌈",
        "Frequency and photon energy of electromagnetic radiation.",
        ["wavelength", "frequency", "photon energy", "spectrum"]),
];

// ============================================================================
// Lookups
// ============================================================================

static BY_SLUG: Lazy<HashMap<&'static str, &'static CalculatorDescriptor>> =
    Lazy::new(|| CALCULATORS.iter().map(|c| (c.slug, c)).collect());

static BY_KIND: Lazy<HashMap<CalculatorKind, &'static CalculatorDescriptor>> =
    Lazy::new(|| CALCULATORS.iter().map(|c| (c.kind, c)).collect());

pub fn find_calculator(slug: &str) -> Option<&'static CalculatorDescriptor> {
    BY_SLUG.get(slug).copied()
}

pub fn find_category(slug: &str) -> Option<&'static CategoryDescriptor> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Descriptor for a calculator kind. Every kind has exactly one.
pub fn descriptor(kind: CalculatorKind) -> Option<&'static CalculatorDescriptor> {
    BY_KIND.get(&kind).copied()
}

/// Calculators in a category, in directory order
pub fn in_category(category: CategorySlug) -> impl Iterator<Item = &'static CalculatorDescriptor> {
    CALCULATORS.iter().filter(move |c| c.category == category)
}

/// Case-insensitive match on title, slug or keywords
pub fn search(query: &str) -> Vec<&'static CalculatorDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CALCULATORS.iter().collect();
    }
    CALCULATORS
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&needle)
                || c.slug.contains(&needle)
                || c.keywords.iter().any(|k| k.contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_at_least_fifty_calculators() {
        assert_eq!(CALCULATORS.len(), 51);
        assert_eq!(CALCULATORS.len(), CalculatorKind::ALL.len());
    }

    #[test]
    fn test_ids_and_slugs_unique() {
        let ids: HashSet<_> = CALCULATORS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CALCULATORS.len());
        let slugs: HashSet<_> = CALCULATORS.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), CALCULATORS.len());
        let categories: HashSet<_> = CATEGORIES.iter().map(|c| c.slug).collect();
        assert_eq!(categories.len(), CATEGORIES.len());
        for slug in &categories {
            assert!(!slugs.contains(slug), "calculator slug '{}' shadows a category", slug);
        }
    }

    #[test]
    fn test_every_kind_has_one_descriptor() {
        let kinds: HashSet<_> = CALCULATORS.iter().map(|c| c.kind).collect();
        assert_eq!(kinds.len(), CALCULATORS.len());
        for kind in CalculatorKind::ALL {
            assert_eq!(descriptor(*kind).map(|d| d.kind), Some(*kind));
        }
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in CategorySlug::ALL {
            assert!(in_category(category).next().is_some(), "{:?} is empty", category);
            assert_eq!(category.descriptor().category, category);
        }
    }

    #[test]
    fn test_slugs_are_url_safe() {
        for c in CALCULATORS {
            assert!(
                c.slug.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'),
                "bad slug '{}'",
                c.slug
            );
            assert!(c.color.starts_with('#') && c.color.len() == 7);
            assert!(!c.keywords.is_empty());
        }
    }

    #[test]
    fn test_lookup_and_search() {
        assert_eq!(find_calculator("mm-to-inches").map(|c| c.id), Some(42));
        assert!(find_calculator("nope").is_none());
        assert_eq!(find_category("gaming").map(|c| c.name), Some("Gaming"));
        assert_eq!(find_calculator("bmi").unwrap().path(), "/health/bmi");
        let hits = search("INTEREST");
        assert!(hits.iter().any(|c| c.slug == "compound-interest"));
        assert!(hits.iter().any(|c| c.slug == "simple-interest"));
        assert_eq!(search("").len(), CALCULATORS.len());
    }
}
