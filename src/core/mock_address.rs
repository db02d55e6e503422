//! Built-in address data for mock mode
//!
//! Provinces are the full static list of Vietnam's 63 provinces.
//! Districts are real samples for Hanoi and Ho Chi Minh City and
//! synthetic for everything else; wards and services are synthetic.
//! All ids are derived deterministically from the input id.

use crate::models::types::{District, Province, ServiceOption, Ward};

const PROVINCES: [(i64, &str, &str); 63] = [
    (1, "Hà Nội", "HN"),
    (2, "Hồ Chí Minh", "HCM"),
    (3, "Đà Nẵng", "DN"),
    (4, "Hải Phòng", "HP"),
    (5, "Cần Thơ", "CT"),
    (6, "An Giang", "AG"),
    (7, "Bà Rịa - Vũng Tàu", "BRVT"),
    (8, "Bắc Giang", "BG"),
    (9, "Bắc Kạn", "BK"),
    (10, "Bạc Liêu", "BL"),
    (11, "Bắc Ninh", "BN"),
    (12, "Bến Tre", "BT"),
    (13, "Bình Định", "BD"),
    (14, "Bình Dương", "BDG"),
    (15, "Bình Phước", "BP"),
    (16, "Bình Thuận", "BTH"),
    (17, "Cà Mau", "CM"),
    (18, "Cao Bằng", "CB"),
    (19, "Đắk Lắk", "DL"),
    (20, "Đắk Nông", "DNG"),
    (21, "Điện Biên", "DB"),
    (22, "Đồng Nai", "DNI"),
    (23, "Đồng Tháp", "DT"),
    (24, "Gia Lai", "GL"),
    (25, "Hà Giang", "HG"),
    (26, "Hà Nam", "HNA"),
    (27, "Hà Tĩnh", "HT"),
    (28, "Hải Dương", "HD"),
    (29, "Hậu Giang", "HAG"),
    (30, "Hòa Bình", "HB"),
    (31, "Hưng Yên", "HY"),
    (32, "Khánh Hòa", "KH"),
    (33, "Kiên Giang", "KG"),
    (34, "Kon Tum", "KT"),
    (35, "Lai Châu", "LC"),
    (36, "Lâm Đồng", "LD"),
    (37, "Lạng Sơn", "LS"),
    (38, "Lào Cai", "LCA"),
    (39, "Long An", "LA"),
    (40, "Nam Định", "ND"),
    (41, "Nghệ An", "NA"),
    (42, "Ninh Bình", "NB"),
    (43, "Ninh Thuận", "NT"),
    (44, "Phú Thọ", "PT"),
    (45, "Phú Yên", "PY"),
    (46, "Quảng Bình", "QB"),
    (47, "Quảng Nam", "QNA"),
    (48, "Quảng Ngãi", "QNG"),
    (49, "Quảng Ninh", "QN"),
    (50, "Quảng Trị", "QT"),
    (51, "Sóc Trăng", "ST"),
    (52, "Sơn La", "SL"),
    (53, "Tây Ninh", "TN"),
    (54, "Thái Bình", "TB"),
    (55, "Thái Nguyên", "TNG"),
    (56, "Thanh Hóa", "TH"),
    (57, "Thừa Thiên Huế", "TTH"),
    (58, "Tiền Giang", "TG"),
    (59, "Trà Vinh", "TV"),
    (60, "Tuyên Quang", "TQ"),
    (61, "Vĩnh Long", "VL"),
    (62, "Vĩnh Phúc", "VP"),
    (63, "Yên Bái", "YB"),
];

const HANOI_PROVINCE_ID: i64 = 1;
const HCMC_PROVINCE_ID: i64 = 2;

const HANOI_DISTRICTS: [(i64, &str); 10] = [
    (1, "Quận Ba Đình"),
    (2, "Quận Hoàn Kiếm"),
    (3, "Quận Tây Hồ"),
    (4, "Quận Long Biên"),
    (5, "Quận Cầu Giấy"),
    (6, "Quận Đống Đa"),
    (7, "Quận Hai Bà Trưng"),
    (8, "Quận Hoàng Mai"),
    (9, "Quận Thanh Xuân"),
    (10, "Huyện Sóc Sơn"),
];

const HCMC_DISTRICTS: [(i64, &str); 10] = [
    (11, "Quận 1"),
    (12, "Quận 3"),
    (13, "Quận 4"),
    (14, "Quận 5"),
    (15, "Quận 7"),
    (16, "Quận 10"),
    (17, "Quận Bình Thạnh"),
    (18, "Quận Gò Vấp"),
    (19, "Quận Tân Bình"),
    (20, "Thành phố Thủ Đức"),
];

/// Ward codes are `offset + district_id`
const WARD_TEMPLATE: [(i64, &str); 5] = [
    (1000, "Phường 1"),
    (2000, "Phường 2"),
    (3000, "Phường 3"),
    (4000, "Xã A"),
    (5000, "Xã B"),
];

/// (service_id, short name, service_type_id)
const SERVICE_TEMPLATE: [(i64, &str, i64); 3] = [
    (53319, "Nhanh", 1),
    (53320, "Chuẩn", 2),
    (53321, "Tiết kiệm", 3),
];

/// All 63 provinces
pub fn provinces() -> Vec<Province> {
    PROVINCES
        .iter()
        .map(|&(id, name, code)| Province::new(id, name, code))
        .collect()
}

/// Districts of a province
pub fn districts(province_id: i64) -> Vec<District> {
    let sample: &[(i64, &str)] = match province_id {
        HANOI_PROVINCE_ID => &HANOI_DISTRICTS,
        HCMC_PROVINCE_ID => &HCMC_DISTRICTS,
        _ => return synthetic_districts(province_id),
    };

    sample
        .iter()
        .map(|&(id, name)| District::new(id, name, province_id))
        .collect()
}

/// Three generated districts; none when the ids would overflow
fn synthetic_districts(province_id: i64) -> Vec<District> {
    let (Some(city), Some(first), Some(second)) = (
        province_id.checked_add(100),
        province_id.checked_add(200),
        province_id.checked_add(300),
    ) else {
        return Vec::new();
    };

    vec![
        District::new(city, format!("Thành phố/Thị xã {}", province_id), province_id),
        District::new(first, "Huyện A", province_id),
        District::new(second, "Huyện B", province_id),
    ]
}

/// Wards of a district; none when the codes would overflow
pub fn wards(district_id: i64) -> Vec<Ward> {
    WARD_TEMPLATE
        .iter()
        .map(|&(offset, name)| {
            offset
                .checked_add(district_id)
                .map(|code| Ward::new(code.to_string(), name, district_id))
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

/// Services between two districts; one per service type
pub fn services(_from_district: Option<i64>, _to_district: i64) -> Vec<ServiceOption> {
    SERVICE_TEMPLATE
        .iter()
        .map(|&(service_id, name, service_type_id)| ServiceOption {
            service_id,
            short_name: name.to_string(),
            service_type_id,
        })
        .collect()
}
