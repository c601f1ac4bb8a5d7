//! 내열강·내열합금의 온도별 물성 문헌값.
//!
//! 온도는 °C, 값은 `scale`을 곱하기 전의 문헌 표기 단위(MPa, MJ/m², GPa, 1e-6/K 등)다.
//! [`MaterialCatalog::standard`](super::MaterialCatalog::standard)가 K·SI 로 바꿔 등록한다.

use crate::interp::OutOfRange;

/// 문헌 출처.
pub const REFERENCE: &str = "Арзамасов Б.Н. и др. Справочник по конструкционным материалам. МГТУ им. Н.Э. Баумана, 2006";

const MPA: f64 = 1e6;
const MJ: f64 = 1e6;
const GPA: f64 = 1e9;
const MICRO: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub value: f64,
}

/// 곡선 생성 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveShape {
    /// 재료 기본 차수·범위 정책을 따르는 표 (4행 이상)
    Table,
    /// 자체 차수와 범위 정책을 가진 곡선
    Curve { order: u8, out_of_range: OutOfRange },
}

#[derive(Debug)]
pub struct CurveData {
    pub key: &'static str,
    pub shape: CurveShape,
    pub scale: f64,
    pub points: &'static [TempPoint],
}

#[derive(Debug)]
pub struct MaterialData {
    pub name: &'static str,
    pub pages: &'static str,
    pub curves: &'static [CurveData],
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        name: "ХН70МВТЮБ",
        pages: "c.412-413",
        curves: &[
            table(
                "sigma_s",
                MPA,
                &[
                    tp(20.0, 1060.0),
                    tp(600.0, 980.0),
                    tp(700.0, 930.0),
                    tp(800.0, 720.0),
                    tp(850.0, 600.0),
                    tp(900.0, 380.0),
                ],
            ),
            table(
                "sigma_t",
                MPA,
                &[
                    tp(20.0, 560.0),
                    tp(600.0, 550.0),
                    tp(700.0, 530.0),
                    tp(800.0, 450.0),
                    tp(850.0, 400.0),
                    tp(900.0, 220.0),
                ],
            ),
            table(
                "KCU",
                MJ,
                &[
                    tp(700.0, 0.8),
                    tp(750.0, 0.7),
                    tp(800.0, 0.6),
                    tp(850.0, 0.7),
                ],
            ),
            table(
                "sigma_100",
                MPA,
                &[
                    tp(650.0, 620.0),
                    tp(700.0, 480.0),
                    tp(800.0, 250.0),
                    tp(850.0, 180.0),
                ],
            ),
            table(
                "sigma_200",
                MPA,
                &[
                    tp(650.0, 600.0),
                    tp(700.0, 420.0),
                    tp(800.0, 230.0),
                    tp(850.0, 230.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "ХН80ТБЮ",
        pages: "c.413",
        curves: &[
            table(
                "sigma_s",
                MPA,
                &[
                    tp(29.0, 960.0),
                    tp(500.0, 1000.0),
                    tp(600.0, 830.0),
                    tp(630.0, 790.0),
                    tp(650.0, 700.0),
                    tp(700.0, 680.0),
                ],
            ),
            table(
                "sigma_t",
                MPA,
                &[
                    tp(29.0, 650.0),
                    tp(500.0, 610.0),
                    tp(600.0, 600.0),
                    tp(630.0, 600.0),
                    tp(650.0, 550.0),
                    tp(700.0, 500.0),
                ],
            ),
            curve(
                "KCU",
                2,
                OutOfRange::Extrapolate,
                MJ,
                &[
                    tp(29.0, 0.7),
                    tp(650.0, 1.0),
                    tp(700.0, 1.2),
                ],
            ),
            curve(
                "sigma_1000",
                1,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 450.0),
                    tp(700.0, 280.0),
                ],
            ),
            curve(
                "sigma_5000",
                1,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 320.0),
                    tp(700.0, 220.0),
                ],
            ),
            curve(
                "sigma_10000",
                1,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 280.0),
                    tp(700.0, 170.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "ХН70ВМТЮ",
        pages: "c.414-415",
        curves: &[
            table(
                "sigma_s",
                MPA,
                &[
                    tp(20.0, 1030.0),
                    tp(500.0, 1020.0),
                    tp(600.0, 970.0),
                    tp(650.0, 990.0),
                    tp(700.0, 890.0),
                    tp(750.0, 710.0),
                    tp(800.0, 570.0),
                    tp(900.0, 300.0),
                    tp(950.0, 140.0),
                    tp(1000.0, 80.0),
                ],
            ),
            table(
                "sigma_t",
                MPA,
                &[
                    tp(20.0, 670.0),
                    tp(500.0, 640.0),
                    tp(600.0, 600.0),
                    tp(650.0, 600.0),
                    tp(700.0, 580.0),
                    tp(750.0, 580.0),
                    tp(800.0, 500.0),
                    tp(900.0, 280.0),
                    tp(950.0, 120.0),
                    tp(1000.0, 70.0),
                ],
            ),
            table(
                "KCU",
                MJ,
                &[
                    tp(20.0, 0.8),
                    tp(500.0, 0.9),
                    tp(600.0, 0.9),
                    tp(650.0, 0.8),
                    tp(700.0, 0.9),
                    tp(750.0, 0.85),
                    tp(800.0, 1.05),
                ],
            ),
            curve(
                "sigma_100",
                1,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(750.0, 360.0),
                    tp(800.0, 240.0),
                ],
            ),
            curve(
                "sigma_1000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 650.0),
                    tp(650.0, 550.0),
                    tp(700.0, 310.0),
                    tp(750.0, 250.0),
                    tp(800.0, 175.0),
                ],
            ),
            curve(
                "sigma_2000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 600.0),
                    tp(650.0, 400.0),
                    tp(700.0, 270.0),
                    tp(750.0, 200.0),
                ],
            ),
            curve(
                "sigma_3000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 470.0),
                    tp(750.0, 215.0),
                    tp(800.0, 145.0),
                ],
            ),
            curve(
                "sigma_5000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 560.0),
                    tp(650.0, 440.0),
                    tp(750.0, 185.0),
                    tp(800.0, 130.0),
                ],
            ),
            curve(
                "sigma_10000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 530.0),
                    tp(650.0, 385.0),
                    tp(750.0, 170.0),
                    tp(800.0, 125.0),
                ],
            ),
            curve(
                "sigma_20000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 500.0),
                    tp(650.0, 340.0),
                    tp(750.0, 190.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "ХН55ВМКЮ",
        pages: "c.415",
        curves: &[
            table(
                "sigma_s",
                MPA,
                &[
                    tp(20.0, 1100.0),
                    tp(700.0, 1080.0),
                    tp(750.0, 1080.0),
                    tp(800.0, 1000.0),
                    tp(850.0, 750.0),
                    tp(900.0, 650.0),
                    tp(950.0, 550.0),
                    tp(1000.0, 350.0),
                ],
            ),
            table(
                "sigma_t",
                MPA,
                &[
                    tp(20.0, 750.0),
                    tp(700.0, 750.0),
                    tp(750.0, 750.0),
                    tp(800.0, 700.0),
                    tp(850.0, 650.0),
                    tp(900.0, 500.0),
                    tp(950.0, 400.0),
                    tp(1000.0, 250.0),
                ],
            ),
            table(
                "KCU",
                MJ,
                &[
                    tp(20.0, 0.2),
                    tp(700.0, 0.3),
                    tp(750.0, 0.3),
                    tp(800.0, 0.3),
                    tp(850.0, 0.3),
                    tp(900.0, 0.4),
                    tp(950.0, 0.4),
                    tp(1000.0, 0.4),
                ],
            ),
            curve(
                "sigma_100",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(800.0, 440.0),
                    tp(900.0, 240.0),
                    tp(950.0, 140.0),
                ],
            ),
            curve(
                "sigma_1000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(800.0, 310.0),
                    tp(900.0, 130.0),
                    tp(950.0, 65.0),
                ],
            ),
            curve(
                "sigma_2000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(800.0, 290.0),
                    tp(900.0, 100.0),
                    tp(950.0, 55.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "10Х18Н9Т",
        pages: "c.402",
        curves: &[
            table(
                "sigma_s",
                MPA,
                &[
                    tp(20.0, 554.0),
                    tp(650.0, 320.0),
                    tp(800.0, 185.0),
                    tp(900.0, 91.0),
                    tp(1000.0, 55.0),
                    tp(1100.0, 38.0),
                ],
            ),
            table(
                "KCU",
                MJ,
                &[
                    tp(20.0, 1.25),
                    tp(650.0, 1.96),
                    tp(800.0, 2.59),
                    tp(900.0, 2.36),
                    tp(1000.0, 2.06),
                    tp(1100.0, 1.51),
                ],
            ),
            curve(
                "sigma_100000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 110.0),
                    tp(650.0, 70.0),
                    tp(700.0, 45.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "08Х18Н12М3Т",
        pages: "c.402",
        curves: &[
            curve(
                "sigma_1",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 350.0),
                    tp(700.0, 270.0),
                    tp(760.0, 210.0),
                    tp(815.0, 145.0),
                    tp(870.0, 120.0),
                    tp(980.0, 58.0),
                ],
            ),
            curve(
                "sigma_10",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 270.0),
                    tp(700.0, 210.0),
                    tp(760.0, 145.0),
                    tp(815.0, 105.0),
                    tp(870.0, 77.0),
                    tp(980.0, 35.0),
                ],
            ),
            curve(
                "sigma_100",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 220.0),
                    tp(700.0, 164.0),
                    tp(760.0, 110.0),
                    tp(815.0, 77.0),
                    tp(870.0, 52.0),
                    tp(980.0, 19.0),
                ],
            ),
            curve(
                "sigma_300",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 196.0),
                    tp(700.0, 155.0),
                    tp(760.0, 83.0),
                    tp(815.0, 66.0),
                    tp(870.0, 42.0),
                    tp(980.0, 13.0),
                ],
            ),
            curve(
                "sigma_500",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 189.0),
                    tp(700.0, 140.0),
                    tp(760.0, 84.0),
                    tp(815.0, 61.0),
                    tp(870.0, 39.0),
                    tp(980.0, 10.0),
                ],
            ),
            curve(
                "sigma_1000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 182.0),
                    tp(700.0, 126.0),
                    tp(760.0, 73.0),
                    tp(815.0, 49.0),
                    tp(870.0, 30.0),
                    tp(980.0, 8.4),
                ],
            ),
            curve(
                "sigma_10000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 140.0),
                    tp(700.0, 84.0),
                    tp(760.0, 49.0),
                    tp(815.0, 23.0),
                ],
            ),
            curve(
                "sigma_100000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(650.0, 112.0),
                    tp(700.0, 62.0),
                    tp(760.0, 30.0),
                    tp(815.0, 11.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "40Х15Н7ГФ2МС",
        pages: "c.406-407",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 1000.0),
                    tp(300.0, 810.0),
                    tp(400.0, 780.0),
                    tp(500.0, 700.0),
                    tp(600.0, 640.0),
                    tp(700.0, 520.0),
                    tp(800.0, 380.0),
                    tp(900.0, 250.0),
                    tp(1000.0, 160.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 600.0),
                    tp(300.0, 550.0),
                    tp(400.0, 540.0),
                    tp(500.0, 490.0),
                    tp(600.0, 500.0),
                    tp(700.0, 430.0),
                    tp(800.0, 280.0),
                ],
            ),
            curve(
                "sigma_100",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 430.0),
                    tp(700.0, 250.0),
                    tp(800.0, 130.0),
                    tp(900.0, 75.0),
                ],
            ),
            curve(
                "sigma_1000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 320.0),
                    tp(700.0, 180.0),
                    tp(800.0, 84.0),
                ],
            ),
            curve(
                "sigma_10000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 250.0),
                    tp(700.0, 110.0),
                    tp(800.0, 50.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "37Х12Н8Г8МФБ",
        pages: "c.407",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 1000.0),
                    tp(200.0, 770.0),
                    tp(300.0, 740.0),
                    tp(350.0, 730.0),
                    tp(400.0, 730.0),
                    tp(450.0, 720.0),
                    tp(500.0, 680.0),
                    tp(550.0, 660.0),
                    tp(600.0, 600.0),
                    tp(650.0, 560.0),
                    tp(700.0, 500.0),
                    tp(750.0, 420.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 600.0),
                    tp(200.0, 600.0),
                    tp(300.0, 540.0),
                    tp(350.0, 520.0),
                    tp(400.0, 500.0),
                    tp(450.0, 500.0),
                    tp(500.0, 500.0),
                    tp(550.0, 490.0),
                    tp(600.0, 490.0),
                    tp(650.0, 450.0),
                    tp(700.0, 430.0),
                    tp(750.0, 380.0),
                ],
            ),
            curve(
                "sigma_100",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 450.0),
                    tp(650.0, 370.0),
                    tp(700.0, 310.0),
                ],
            ),
            curve(
                "sigma_1000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 340.0),
                    tp(650.0, 250.0),
                    tp(700.0, 230.0),
                ],
            ),
            curve(
                "sigma_5000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 310.0),
                    tp(650.0, 220.0),
                    tp(700.0, 190.0),
                ],
            ),
            curve(
                "sigma_10000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 300.0),
                    tp(650.0, 210.0),
                    tp(700.0, 180.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "08Х16Н13М2Б",
        pages: "c.408",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 620.0),
                    tp(500.0, 490.0),
                    tp(600.0, 470.0),
                    tp(650.0, 440.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 230.0),
                    tp(500.0, 175.0),
                    tp(600.0, 175.0),
                    tp(650.0, 175.0),
                ],
            ),
            curve(
                "sigma_10000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(550.0, 260.0),
                    tp(600.0, 200.0),
                    tp(650.0, 130.0),
                    tp(700.0, 60.0),
                ],
            ),
            curve(
                "sigma_100000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(550.0, 210.0),
                    tp(600.0, 150.0),
                    tp(650.0, 95.0),
                    tp(700.0, 35.0),
                ],
            ),
            curve(
                "alpha",
                2,
                OutOfRange::Nan,
                MICRO,
                &[
                    tp(400.0, 17.1),
                    tp(600.0, 17.8),
                    tp(800.0, 18.6),
                ],
            ),
            curve(
                "E",
                3,
                OutOfRange::Nan,
                GPA,
                &[
                    tp(20.0, 206.0),
                    tp(200.0, 191.0),
                    tp(400.0, 174.0),
                    tp(600.0, 167.0),
                    tp(650.0, 158.0),
                ],
            ),
            curve(
                "l",
                3,
                OutOfRange::Nan,
                1.0,
                &[
                    tp(200.0, 17.1),
                    tp(400.0, 20.1),
                    tp(600.0, 21.7),
                    tp(650.0, 23.0),
                    tp(700.0, 24.7),
                ],
            ),
        ],
    },
    MaterialData {
        name: "09Х14Н16Б",
        pages: "c.409",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 570.0),
                    tp(600.0, 400.0),
                    tp(650.0, 360.0),
                    tp(700.0, 330.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 250.0),
                    tp(600.0, 188.0),
                    tp(650.0, 160.0),
                    tp(700.0, 160.0),
                ],
            ),
            curve(
                "KCU",
                2,
                OutOfRange::Nan,
                MJ,
                &[
                    tp(20.0, 2.1),
                    tp(600.0, 3.3),
                    tp(700.0, 3.3),
                ],
            ),
            curve(
                "sigma_10000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 170.0),
                    tp(650.0, 110.0),
                    tp(700.0, 65.0),
                ],
            ),
            curve(
                "sigma_100000",
                2,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 120.0),
                    tp(650.0, 77.0),
                    tp(700.0, 40.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "10Х11Н20Т3Р",
        pages: "c.409-410",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 1000.0),
                    tp(400.0, 950.0),
                    tp(600.0, 800.0),
                    tp(700.0, 680.0),
                    tp(750.0, 560.0),
                    tp(800.0, 360.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 600.0),
                    tp(400.0, 600.0),
                    tp(600.0, 530.0),
                    tp(700.0, 470.0),
                    tp(750.0, 450.0),
                    tp(800.0, 250.0),
                ],
            ),
            curve(
                "sigma_100",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(500.0, 730.0),
                    tp(550.0, 650.0),
                    tp(600.0, 590.0),
                    tp(650.0, 480.0),
                    tp(700.0, 400.0),
                    tp(750.0, 280.0),
                ],
            ),
        ],
    },
    MaterialData {
        name: "09Х14Н19В2БР",
        pages: "c.410",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 570.0),
                    tp(600.0, 440.0),
                    tp(650.0, 430.0),
                    tp(700.0, 410.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 230.0),
                    tp(600.0, 140.0),
                    tp(650.0, 140.0),
                    tp(700.0, 140.0),
                ],
            ),
            curve(
                "KCU",
                3,
                OutOfRange::Nan,
                MJ,
                &[
                    tp(20.0, 1.8),
                    tp(600.0, 2.2),
                    tp(650.0, 2.1),
                    tp(700.0, 2.2),
                ],
            ),
            curve(
                "sigma_10000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 270.0),
                    tp(650.0, 168.0),
                    tp(700.0, 125.0),
                    tp(750.0, 70.0),
                ],
            ),
            curve(
                "sigma_100000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 200.0),
                    tp(650.0, 130.0),
                    tp(700.0, 95.0),
                    tp(750.0, 55.0),
                ],
            ),
            curve(
                "E",
                3,
                OutOfRange::Nan,
                GPA,
                &[
                    tp(20.0, 202.0),
                    tp(100.0, 199.0),
                    tp(200.0, 193.0),
                    tp(300.0, 186.0),
                    tp(400.0, 178.0),
                    tp(500.0, 168.0),
                    tp(600.0, 160.0),
                    tp(700.0, 152.0),
                ],
            ),
            curve(
                "l",
                3,
                OutOfRange::Nan,
                1.0,
                &[
                    tp(20.0, 15.4),
                    tp(100.0, 16.3),
                    tp(200.0, 16.3),
                    tp(300.0, 18.0),
                    tp(400.0, 19.2),
                    tp(500.0, 21.3),
                    tp(600.0, 23.4),
                    tp(700.0, 25.1),
                    tp(800.0, 27.6),
                ],
            ),
            curve(
                "alpha",
                3,
                OutOfRange::Nan,
                MICRO,
                &[
                    tp(100.0, 15.2),
                    tp(200.0, 16.3),
                    tp(300.0, 16.9),
                    tp(400.0, 17.5),
                    tp(500.0, 17.8),
                    tp(600.0, 18.1),
                    tp(700.0, 18.6),
                    tp(800.0, 18.6),
                ],
            ),
        ],
    },
    MaterialData {
        name: "08Х15Н24В4ТР",
        pages: "c.410",
        curves: &[
            curve(
                "sigma_s",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 750.0),
                    tp(650.0, 650.0),
                    tp(700.0, 600.0),
                    tp(750.0, 500.0),
                ],
            ),
            curve(
                "sigma_t",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(20.0, 500.0),
                    tp(650.0, 450.0),
                    tp(700.0, 400.0),
                    tp(750.0, 350.0),
                ],
            ),
            curve(
                "KCU",
                3,
                OutOfRange::Nan,
                MJ,
                &[
                    tp(20.0, 1.2),
                    tp(650.0, 1.01),
                    tp(700.0, 1.0),
                    tp(750.0, 0.1),
                ],
            ),
            curve(
                "sigma_1000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 500.0),
                    tp(650.0, 400.0),
                    tp(700.0, 250.0),
                    tp(750.0, 180.0),
                ],
            ),
            curve(
                "sigma_10000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 400.0),
                    tp(650.0, 200.0),
                    tp(700.0, 180.0),
                    tp(750.0, 120.0),
                ],
            ),
            curve(
                "sigma_100000",
                3,
                OutOfRange::Nan,
                MPA,
                &[
                    tp(600.0, 300.0),
                    tp(650.0, 230.0),
                    tp(700.0, 140.0),
                    tp(750.0, 80.0),
                ],
            ),
        ],
    },
];

const fn table(key: &'static str, scale: f64, points: &'static [TempPoint]) -> CurveData {
    CurveData {
        key,
        shape: CurveShape::Table,
        scale,
        points,
    }
}

const fn curve(
    key: &'static str,
    order: u8,
    out_of_range: OutOfRange,
    scale: f64,
    points: &'static [TempPoint],
) -> CurveData {
    CurveData {
        key,
        shape: CurveShape::Curve {
            order,
            out_of_range,
        },
        scale,
        points,
    }
}

const fn tp(temp_c: f64, value: f64) -> TempPoint {
    TempPoint { temp_c, value }
}
