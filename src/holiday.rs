use phf::phf_map;
use std::ops::RangeInclusive;

/// Solar-fixed holidays, keyed `"{month}-{day}"` with a one-based month.
/// These recur on the same date every year.
static FIXED_SOLAR: phf::Map<&'static str, &'static str> = phf_map! {
    "1-1" => "元旦",
    "2-14" => "情人节",
    "3-8" => "妇女节",
    "3-12" => "植树节",
    "5-1" => "劳动节",
    "5-4" => "青年节",
    "6-1" => "儿童节",
    "8-1" => "建军节",
    "9-10" => "教师节",
    "10-1" => "国庆节",
    "12-24" => "平安夜",
    "12-25" => "圣诞节",
};

/// Lunar-derived festivals resolved to their solar dates by hand, keyed
/// `"{year}-{month}-{day}"`. Maintained for [`LUNAR_TABLE_YEARS`] only.
static LUNAR_BY_YEAR: phf::Map<&'static str, &'static str> = phf_map! {
    // 2024
    "2024-1-18" => "腊八节",
    "2024-2-2" => "小年",
    "2024-2-9" => "除夕",
    "2024-2-10" => "春节",
    "2024-2-24" => "元宵节",
    "2024-4-4" => "清明节",
    "2024-6-10" => "端午节",
    "2024-8-10" => "七夕",
    "2024-9-17" => "中秋节",
    "2024-10-11" => "重阳节",
    "2024-12-30" => "腊八节",
    // 2025
    "2025-1-22" => "小年",
    "2025-1-28" => "除夕",
    "2025-1-29" => "春节",
    "2025-2-12" => "元宵节",
    "2025-4-4" => "清明节",
    "2025-5-31" => "端午节",
    "2025-8-29" => "七夕",
    "2025-10-6" => "中秋节",
    "2025-10-29" => "重阳节",
    // 2026
    "2026-1-20" => "腊八节",
    "2026-2-10" => "小年",
    "2026-2-16" => "除夕",
    "2026-2-17" => "春节",
    "2026-3-3" => "元宵节",
    "2026-4-5" => "清明节",
    "2026-6-19" => "端午节",
    "2026-8-19" => "七夕",
    "2026-9-25" => "中秋节",
    "2026-10-18" => "重阳节",
};

/// Validity range of the hand-curated lunar table.
pub const LUNAR_TABLE_YEARS: RangeInclusive<i32> = 2024..=2026;

/// Whether the per-year lunar table covers `year`. Outside this range
/// [`holiday_for`] still answers solar-fixed holidays but knows nothing
/// about lunar-derived festivals, real as they may be.
pub fn covers_lunar_year(year: i32) -> bool {
    LUNAR_TABLE_YEARS.contains(&year)
}

/// Holiday label for a calendar date (`month0` is zero-based).
///
/// Solar-fixed entries take precedence over per-year lunar entries; lookup
/// is exact-match only.
pub fn holiday_for(year: i32, month0: u32, day: u32) -> Option<&'static str> {
    let fixed_key = format!("{}-{}", month0 + 1, day);
    if let Some(label) = FIXED_SOLAR.get(fixed_key.as_str()) {
        return Some(label);
    }

    let year_key = format!("{}-{}-{}", year, month0 + 1, day);
    LUNAR_BY_YEAR.get(year_key.as_str()).copied()
}

/// The two-day lunar new year observance gets a distinct visual treatment.
/// This is a label contract: the strings themselves are part of the API.
pub fn is_lunar_new_year(label: &str) -> bool {
    label == "春节" || label == "除夕"
}
