use ahash::AHashMap;
use lazy_static::lazy_static;
use regex::Regex;

/// Province-level prefixes of the administrative division code (GB/T 2260), plus `91` for
/// residents registered abroad.
const REGIONS: &[(u8, &str)] = &[
    (11, "北京"),
    (12, "天津"),
    (13, "河北"),
    (14, "山西"),
    (15, "内蒙古"),
    (21, "辽宁"),
    (22, "吉林"),
    (23, "黑龙江"),
    (31, "上海"),
    (32, "江苏"),
    (33, "浙江"),
    (34, "安徽"),
    (35, "福建"),
    (36, "江西"),
    (37, "山东"),
    (41, "河南"),
    (42, "湖北"),
    (43, "湖南"),
    (44, "广东"),
    (45, "广西"),
    (46, "海南"),
    (50, "重庆"),
    (51, "四川"),
    (52, "贵州"),
    (53, "云南"),
    (54, "西藏"),
    (61, "陕西"),
    (62, "甘肃"),
    (63, "青海"),
    (64, "宁夏"),
    (65, "新疆"),
    (71, "台湾"),
    (81, "香港"),
    (82, "澳门"),
    (91, "国外"),
];

lazy_static! {
    static ref REGION_BY_PREFIX: AHashMap<u8, &'static str> = REGIONS.iter().copied().collect();
    static ref ADDRESS_CODE: Regex = Regex::new("^[1-9][0-9]{5}$").unwrap();
}

/// Name of the region owning the two-digit `prefix`, if it is a known one.
pub fn region_name(prefix: u8) -> Option<&'static str> {
    REGION_BY_PREFIX.get(&prefix).copied()
}

/// Looks up the region of a 6 digit address code (the first 6 characters of an identity number).
/// Returns `None` when the code is malformed or its prefix is not in the table.
pub fn region_of_address_code(address_code: &str) -> Option<&'static str> {
    if !ADDRESS_CODE.is_match(address_code) {
        return None;
    }
    region_name(address_code[..2].parse().ok()?)
}
