//! 경도 환산 기준표.
//!
//! 출처: Марочник сталей и сплавов, 2-е изд. / под ред. А.С. Зубченко.
//! М.: Машиностроение, 2003, с. 784.
//! 각 행은 같은 물리적 경도를 여러 척도로 나타낸 값이며, 경도가 감소하는 순서로 정렬되어 있다.
//! 적용 범위 밖의 칸은 NaN 이다.

use super::HardnessScale;

pub const TABLE_REFERENCE: &str =
    "Марочник сталей и сплавов. 2-е изд. / под ред. А.С. Зубченко. М.: Машиностроение, 2003, с. 784";

const NAN: f64 = f64::NAN;

/// 환산표 한 행. `d10mm`는 10 mm 볼 압흔 지름(브리넬 시험의 대리 변수)이다.
#[derive(Debug, Clone, Copy)]
pub struct HardnessRecord {
    pub d10mm: f64,
    pub hb: f64,
    pub hra: f64,
    pub hrc: f64,
    pub hrb: f64,
    pub hv: f64,
    pub hsd: f64,
}

impl HardnessRecord {
    pub const fn new(d10mm: f64, hb: f64, hra: f64, hrc: f64, hrb: f64, hv: f64, hsd: f64) -> Self {
        Self {
            d10mm,
            hb,
            hra,
            hrc,
            hrb,
            hv,
            hsd,
        }
    }

    /// 척도별 값. 정의되지 않은 칸은 `None`.
    pub fn get(&self, scale: HardnessScale) -> Option<f64> {
        let value = match scale {
            HardnessScale::Brinell => self.hb,
            HardnessScale::RockwellA => self.hra,
            HardnessScale::RockwellC => self.hrc,
            HardnessScale::RockwellB => self.hrb,
            HardnessScale::Vickers => self.hv,
            HardnessScale::ShoreD => self.hsd,
        };
        value.is_finite().then_some(value)
    }
}

/// 기준표 전체.
pub fn reference_table() -> &'static [HardnessRecord] {
    REFERENCE_TABLE
}

pub const REFERENCE_TABLE: &[HardnessRecord] = &[
    row(2.30, 712.0, 85.1, 66.4, NAN, 1016.0, 98.3),
    row(2.31, 706.0, 84.9, 66.0, NAN, 999.0, 97.8),
    row(2.32, 700.0, 84.7, 65.7, NAN, 983.0, 97.4),
    row(2.33, 694.0, 84.5, 65.3, NAN, 967.0, 96.9),
    row(2.34, 688.0, 84.3, 65.0, NAN, 951.0, 96.3),
    row(2.35, 682.0, 84.1, 64.6, NAN, 936.0, 95.8),
    row(2.36, 676.0, 83.9, 64.3, NAN, 922.0, 95.3),
    row(2.37, 670.0, 83.6, 63.9, NAN, 907.0, 94.7),
    row(2.38, 665.0, 83.4, 63.6, NAN, 893.0, 94.1),
    row(2.39, 659.0, 83.2, 63.2, NAN, 880.0, 93.5),
    row(2.40, 653.0, 83.0, 62.9, NAN, 866.0, 92.9),
    row(2.41, 648.0, 82.8, 62.5, NAN, 853.0, 92.3),
    row(2.42, 643.0, 82.6, 62.1, NAN, 841.0, 91.7),
    row(2.43, 637.0, 82.4, 61.8, NAN, 828.0, 91.1),
    row(2.44, 632.0, 82.2, 61.4, NAN, 816.0, 90.4),
    row(2.45, 627.0, 82.0, 61.1, NAN, 804.0, 89.8),
    row(2.46, 621.0, 81.8, 60.7, NAN, 793.0, 89.1),
    row(2.47, 616.0, 81.6, 60.4, NAN, 782.0, 88.5),
    row(2.48, 611.0, 81.4, 60.0, NAN, 771.0, 87.8),
    row(2.49, 606.0, 81.3, 59.7, NAN, 760.0, 87.2),
    row(2.50, 601.0, 81.1, 59.3, NAN, 750.0, 86.5),
    row(2.51, 597.0, 80.9, 59.0, NAN, 739.0, 85.9),
    row(2.52, 592.0, 80.7, 58.6, NAN, 730.0, 85.2),
    row(2.53, 587.0, 80.5, 58.3, NAN, 720.0, 84.5),
    row(2.54, 582.0, 80.3, 57.9, NAN, 710.0, 83.9),
    row(2.55, 578.0, 80.1, 57.6, NAN, 701.0, 83.2),
    row(2.56, 573.0, 79.9, 57.2, NAN, 692.0, 82.6),
    row(2.57, 569.0, 79.7, 56.9, NAN, 683.0, 81.9),
    row(2.58, 564.0, 79.6, 56.5, NAN, 675.0, 81.3),
    row(2.59, 560.0, 79.4, 56.2, NAN, 666.0, 80.6),
    row(2.60, 555.0, 79.2, 55.8, NAN, 658.0, 80.0),
    row(2.61, 551.0, 79.0, 55.5, NAN, 650.0, 79.3),
    row(2.62, 547.0, 78.8, 55.1, NAN, 643.0, 78.7),
    row(2.63, 542.0, 78.6, 54.8, NAN, 635.0, 78.0),
    row(2.64, 538.0, 78.5, 54.5, NAN, 627.0, 77.4),
    row(2.65, 534.0, 78.3, 54.1, NAN, 620.0, 76.8),
    row(2.66, 530.0, 78.1, 53.8, NAN, 613.0, 76.2),
    row(2.67, 526.0, 77.9, 53.5, NAN, 606.0, 75.6),
    row(2.68, 522.0, 77.7, 53.1, NAN, 599.0, 74.9),
    row(2.69, 518.0, 77.6, 52.8, NAN, 593.0, 74.3),
    row(2.70, 514.0, 77.4, 52.5, NAN, 586.0, 73.7),
    row(2.71, 510.0, 77.2, 52.2, NAN, 580.0, 73.2),
    row(2.72, 506.0, 77.0, 51.8, NAN, 574.0, 72.6),
    row(2.73, 503.0, 76.9, 51.5, NAN, 568.0, 72.0),
    row(2.74, 499.0, 76.7, 51.2, NAN, 562.0, 71.4),
    row(2.75, 495.0, 76.5, 50.9, NAN, 556.0, 70.9),
    row(2.76, 492.0, 76.4, 50.6, NAN, 550.0, 70.3),
    row(2.77, 488.0, 76.2, 50.3, NAN, 544.0, 69.8),
    row(2.78, 484.0, 76.0, 50.0, NAN, 539.0, 69.2),
    row(2.79, 481.0, 75.8, 49.7, NAN, 534.0, 68.7),
    row(2.80, 477.0, 75.7, 49.4, NAN, 528.0, 68.1),
    row(2.81, 474.0, 75.5, 49.1, NAN, 523.0, 67.6),
    row(2.82, 470.0, 75.4, 48.8, NAN, 518.0, 67.1),
    row(2.83, 467.0, 75.2, 48.5, NAN, 513.0, 66.6),
    row(2.84, 464.0, 75.0, 48.2, NAN, 508.0, 66.1),
    row(2.85, 460.0, 74.9, 47.9, NAN, 504.0, 65.6),
    row(2.86, 457.0, 74.7, 47.6, NAN, 499.0, 65.1),
    row(2.87, 454.0, 74.6, 47.3, NAN, 494.0, 64.6),
    row(2.88, 451.0, 74.4, 47.0, NAN, 490.0, 64.1),
    row(2.89, 447.0, 74.2, 46.8, NAN, 485.0, 63.7),
    row(2.90, 444.0, 74.1, 46.5, NAN, 481.0, 63.2),
    row(2.91, 441.0, 73.9, 46.2, NAN, 477.0, 62.7),
    row(2.92, 438.0, 73.8, 45.9, NAN, 473.0, 62.3),
    row(2.93, 435.0, 73.6, 45.7, NAN, 468.0, 61.8),
    row(2.94, 432.0, 73.5, 45.4, NAN, 464.0, 61.4),
    row(2.95, 429.0, 73.3, 45.1, NAN, 460.0, 61.0),
    row(2.96, 426.0, 73.2, 44.9, NAN, 456.0, 60.5),
    row(2.97, 423.0, 73.0, 44.6, NAN, 453.0, 60.1),
    row(2.98, 420.0, 72.9, 44.4, NAN, 449.0, 59.7),
    row(2.99, 417.0, 72.7, 44.1, NAN, 445.0, 59.3),
    row(3.00, 415.0, 72.6, 43.8, NAN, 441.0, 58.9),
    row(3.01, 412.0, 72.4, 43.6, NAN, 438.0, 58.5),
    row(3.02, 409.0, 72.3, 43.3, NAN, 434.0, 58.1),
    row(3.03, 406.0, 72.2, 43.1, NAN, 431.0, 57.7),
    row(3.04, 403.0, 72.0, 42.9, NAN, 427.0, 57.3),
    row(3.05, 401.0, 71.9, 42.6, NAN, 424.0, 56.9),
    row(3.06, 398.0, 71.8, 42.4, NAN, 420.0, 56.5),
    row(3.07, 395.0, 71.6, 42.1, NAN, 417.0, 56.2),
    row(3.08, 393.0, 71.5, 41.9, NAN, 414.0, 56.8),
    row(3.09, 390.0, 71.3, 41.7, NAN, 411.0, 55.4),
    row(3.10, 388.0, 71.2, 41.4, NAN, 408.0, 55.1),
    row(3.11, 385.0, 71.1, 41.2, NAN, 404.0, 54.7),
    row(3.12, 383.0, 71.0, 40.9, NAN, 401.0, 54.4),
    row(3.13, 380.0, 70.8, 40.7, NAN, 398.0, 54.0),
    row(3.14, 378.0, 70.7, 40.5, NAN, 395.0, 53.7),
    row(3.15, 375.0, 70.6, 40.3, NAN, 392.0, 53.3),
    row(3.16, 373.0, 70.4, 40.0, NAN, 389.0, 53.0),
    row(3.17, 370.0, 70.3, 39.8, NAN, 386.0, 52.7),
    row(3.18, 368.0, 70.2, 39.6, NAN, 384.0, 52.3),
    row(3.19, 366.0, 70.1, 39.3, NAN, 381.0, 52.0),
    row(3.20, 363.0, 70.0, 39.1, NAN, 378.0, 51.7),
    row(3.21, 361.0, 69.8, 38.9, NAN, 375.0, 51.4),
    row(3.22, 359.0, 69.7, 38.7, NAN, 372.0, 51.1),
    row(3.23, 356.0, 69.6, 38.5, NAN, 370.0, 50.8),
    row(3.24, 354.0, 69.5, 38.2, NAN, 367.0, 50.4),
    row(3.25, 352.0, 69.4, 38.0, NAN, 364.0, 50.1),
    row(3.26, 350.0, 69.2, 37.8, NAN, 362.0, 49.8),
    row(3.27, 347.0, 69.1, 37.6, NAN, 359.0, 49.5),
    row(3.28, 345.0, 69.0, 37.4, NAN, 357.0, 49.2),
    row(3.29, 343.0, 68.9, 37.1, NAN, 354.0, 48.9),
    row(3.30, 341.0, 68.8, 36.9, NAN, 352.0, 48.6),
    row(3.31, 339.0, 68.7, 36.7, NAN, 349.0, 48.4),
    row(3.32, 337.0, 68.6, 36.5, NAN, 347.0, 48.1),
    row(3.33, 335.0, 68.5, 36.3, NAN, 344.0, 47.8),
    row(3.34, 333.0, 68.4, 36.0, NAN, 342.0, 47.5),
    row(3.35, 331.0, 68.2, 35.8, NAN, 340.0, 47.2),
    row(3.36, 329.0, 68.1, 35.6, NAN, 337.0, 46.9),
    row(3.37, 327.0, 68.0, 35.4, NAN, 335.0, 46.6),
    row(3.38, 325.0, 67.9, 35.2, NAN, 333.0, 46.4),
    row(3.39, 323.0, 67.8, 34.9, NAN, 331.0, 46.1),
    row(3.40, 321.0, 67.7, 34.7, NAN, 328.0, 45.8),
    row(3.41, 319.0, 67.6, 34.5, NAN, 326.0, 45.5),
    row(3.42, 317.0, 67.5, 34.3, NAN, 324.0, 45.3),
    row(3.43, 315.0, 67.4, 34.1, NAN, 322.0, 45.0),
    row(3.44, 313.0, 67.3, 33.8, NAN, 320.0, 44.7),
    row(3.45, 311.0, 67.2, 33.6, NAN, 317.0, 44.5),
    row(3.46, 309.0, 67.1, 33.4, NAN, 315.0, 44.2),
    row(3.47, 307.0, 67.0, 33.2, NAN, 313.0, 44.0),
    row(3.48, 306.0, 66.9, 33.0, NAN, 311.0, 43.7),
    row(3.49, 304.0, 66.8, 32.7, NAN, 309.0, 43.4),
    row(3.50, 302.0, 66.7, 32.5, NAN, 307.0, 43.2),
    row(3.51, 300.0, 66.6, 32.3, NAN, 305.0, 42.9),
    row(3.52, 298.0, 66.5, 32.1, NAN, 303.0, 42.7),
    row(3.53, 297.0, 66.4, 31.9, NAN, 301.0, 42.4),
    row(3.54, 295.0, 66.3, 31.6, NAN, 299.0, 42.2),
    row(3.55, 293.0, 66.2, 31.4, NAN, 298.0, 41.9),
    row(3.56, 292.0, 66.1, 31.2, NAN, 296.0, 41.7),
    row(3.57, 290.0, 66.0, 31.0, NAN, 294.0, 41.4),
    row(3.58, 288.0, 65.9, 30.8, NAN, 292.0, 41.2),
    row(3.59, 287.0, 65.8, 30.5, NAN, 290.0, 40.9),
    row(3.60, 285.0, 65.7, 30.3, NAN, 288.0, 40.7),
    row(3.61, 283.0, 65.6, 30.1, NAN, 286.0, 40.5),
    row(3.62, 282.0, 65.5, 29.9, NAN, 285.0, 40.2),
    row(3.63, 280.0, 65.5, 29.7, NAN, 283.0, 40.0),
    row(3.64, 278.0, 65.4, 29.4, NAN, 281.0, 39.7),
    row(3.65, 277.0, 65.3, 29.2, NAN, 280.0, 39.5),
    row(3.66, 275.0, 65.2, 29.0, NAN, 278.0, 39.3),
    row(3.67, 274.0, 65.1, 28.8, NAN, 276.0, 39.1),
    row(3.68, 272.0, 65.0, 28.6, NAN, 274.0, 38.8),
    row(3.69, 271.0, 64.9, 28.3, NAN, 273.0, 38.6),
    row(3.70, 269.0, 64.8, 28.1, NAN, 271.0, 38.4),
    row(3.71, 268.0, 64.7, 27.9, NAN, 270.0, 38.1),
    row(3.72, 266.0, 64.6, 27.7, NAN, 268.0, 37.9),
    row(3.73, 265.0, 64.5, 27.5, NAN, 266.0, 37.7),
    row(3.74, 263.0, 64.4, 27.3, NAN, 265.0, 37.5),
    row(3.75, 262.0, 64.3, 27.1, NAN, 263.0, 37.3),
    row(3.76, 260.0, 64.2, 26.8, NAN, 262.0, 37.1),
    row(3.77, 259.0, 64.1, 26.6, NAN, 260.0, 36.8),
    row(3.78, 257.0, 64.0, 26.4, NAN, 259.0, 36.6),
    row(3.79, 256.0, 63.9, 26.2, NAN, 257.0, 36.4),
    row(3.80, 255.0, 63.8, 26.0, NAN, 256.0, 36.2),
    row(3.81, 253.0, 63.7, 25.8, NAN, 254.0, 36.0),
    row(3.82, 252.0, 63.6, 25.6, NAN, 253.0, 35.8),
    row(3.83, 251.0, 63.5, 25.4, NAN, 251.0, 35.6),
    row(3.84, 249.0, 63.4, 25.2, NAN, 250.0, 35.4),
    row(3.85, 248.0, 63.3, 25.0, NAN, 249.0, 35.2),
    row(3.86, 246.0, 63.2, 24.8, NAN, 247.0, 35.0),
    row(3.87, 245.0, 63.1, 24.6, NAN, 246.0, 34.8),
    row(3.88, 244.0, 63.0, 24.4, 100.0, 244.0, 34.6),
    row(3.89, 243.0, 62.9, 24.2, 99.9, 243.0, 34.4),
    row(3.90, 241.0, 62.8, 24.0, 99.8, 242.0, 34.2),
    row(3.91, 240.0, 62.7, 23.8, 99.6, 240.0, 34.1),
    row(3.92, 239.0, 62.6, 23.6, 99.5, 239.0, 33.9),
    row(3.93, 237.0, 62.5, 23.4, 99.3, 238.0, 33.7),
    row(3.94, 236.0, 62.4, 23.2, 99.2, 237.0, 33.5),
    row(3.95, 235.0, 62.3, 23.0, 99.0, 235.0, 33.3),
    row(3.96, 234.0, 62.2, 22.8, 98.9, 234.0, 33.1),
    row(3.97, 232.0, 62.1, 22.6, 98.7, 233.0, 33.0),
    row(3.98, 231.0, 62.0, 22.4, 98.6, 231.0, 32.8),
    row(3.99, 230.0, 61.9, 22.2, 98.4, 230.0, 32.6),
    row(4.00, 229.0, 61.8, 22.0, 98.2, 229.0, 32.5),
    row(4.01, 228.0, 61.7, 21.8, 98.1, 228.0, 32.3),
    row(4.02, 226.0, 61.6, 21.6, 97.9, 227.0, 32.1),
    row(4.03, 225.0, 61.5, 21.5, 97.7, 225.0, 32.0),
    row(4.04, 224.0, 61.4, 21.3, 97.6, 224.0, 31.8),
    row(4.05, 223.0, 61.3, 21.1, 97.4, 223.0, 31.6),
    row(4.06, 222.0, 61.1, 20.9, 97.2, 222.0, 31.5),
    row(4.07, 221.0, 61.0, 20.7, 97.0, 221.0, 31.3),
    row(4.08, 219.0, 60.9, 20.5, 96.9, 219.0, 31.2),
    row(4.09, 218.0, 60.8, 20.3, 96.7, 218.0, 31.0),
    row(4.10, 217.0, 60.7, 20.1, 96.5, 217.0, 30.9),
    row(4.11, 216.0, 60.6, 19.9, 96.3, 216.0, 30.7),
    row(4.12, 215.0, 60.5, 19.7, 96.1, 215.0, 30.6),
    row(4.13, 214.0, 60.4, 19.5, 95.9, 214.0, 30.4),
    row(4.14, 213.0, 60.3, 19.2, 95.7, 213.0, 30.3),
    row(4.15, 212.0, 60.1, 19.0, 95.5, 212.0, 30.1),
    row(4.16, 211.0, 60.0, 18.8, 95.4, 211.0, 30.0),
    row(4.17, 210.0, 59.9, 18.6, 95.2, 209.0, 29.8),
    row(4.18, 209.0, 59.8, 18.3, 95.0, 208.0, 29.7),
    row(4.19, 208.0, 59.7, 18.1, 94.8, 207.0, 29.6),
    row(4.20, 206.0, 59.6, 17.9, 94.6, 206.0, 29.4),
    row(4.21, 205.0, 59.4, NAN, 94.4, 205.0, 29.3),
    row(4.22, 204.0, 59.3, NAN, 94.2, 204.0, 29.2),
    row(4.23, 203.0, 59.2, NAN, 94.0, 203.0, 29.0),
    row(4.24, 202.0, 59.1, NAN, 93.8, 202.0, 28.9),
    row(4.25, 201.0, 59.0, NAN, 93.6, 201.0, 28.8),
    row(4.26, 200.0, 58.8, NAN, 93.4, 200.0, 28.6),
    row(4.27, 199.0, 58.7, NAN, 93.2, 199.0, 28.5),
    row(4.28, 198.0, 58.6, NAN, 93.0, 198.0, 28.4),
    row(4.29, 197.0, 58.5, NAN, 92.8, 197.0, 28.3),
    row(4.30, 197.0, 58.4, NAN, 92.6, 196.0, 28.1),
    row(4.31, 196.0, 58.2, NAN, 92.4, 195.0, 28.0),
    row(4.32, 195.0, 58.1, NAN, 92.2, 194.0, 27.9),
    row(4.33, 194.0, 58.0, NAN, 92.0, 193.0, 27.8),
    row(4.34, 193.0, 57.9, NAN, 91.8, 192.0, 27.6),
    row(4.35, 192.0, 57.7, NAN, 91.6, 191.0, 27.5),
    row(4.36, 191.0, 57.6, NAN, 91.3, 190.0, 27.4),
    row(4.37, 190.0, 57.5, NAN, 91.1, 189.0, 27.3),
    row(4.38, 189.0, 57.4, NAN, 90.9, 188.0, 27.2),
    row(4.39, 188.0, 57.2, NAN, 90.7, 187.0, 27.0),
    row(4.40, 187.0, 57.1, NAN, 90.5, 186.0, 26.9),
    row(4.41, 186.0, 57.0, NAN, 90.3, 185.0, 26.8),
    row(4.42, 185.0, 56.9, NAN, 90.1, 184.0, 26.7),
    row(4.43, 185.0, 56.8, NAN, 89.9, 183.0, 26.6),
    row(4.44, 184.0, 56.6, NAN, 89.7, 183.0, 26.4),
    row(4.45, 183.0, 56.5, NAN, 89.5, 182.0, 26.3),
    row(4.46, 182.0, 56.4, NAN, 89.3, 181.0, 26.2),
    row(4.47, 181.0, 56.3, NAN, 89.1, 180.0, 26.1),
    row(4.48, 180.0, 56.1, NAN, 88.8, 179.0, 26.0),
    row(4.49, 179.0, 56.0, NAN, 88.6, 178.0, 25.8),
    row(4.50, 179.0, 55.9, NAN, 88.4, 177.0, 25.7),
    row(4.51, 178.0, 55.8, NAN, 88.2, 176.0, 25.6),
    row(4.52, 177.0, 55.6, NAN, 88.0, 175.0, 25.5),
    row(4.53, 176.0, 55.5, NAN, 87.8, 175.0, 25.3),
    row(4.54, 175.0, 55.4, NAN, 87.6, 174.0, 25.2),
    row(4.55, 174.0, 55.3, NAN, 87.4, 173.0, 25.1),
    row(4.56, 174.0, 55.1, NAN, 87.1, 172.0, 25.0),
    row(4.57, 173.0, 55.0, NAN, 86.9, 171.0, 24.9),
    row(4.58, 172.0, 54.9, NAN, 86.7, 171.0, 24.7),
    row(4.59, 171.0, 54.8, NAN, 86.5, 170.0, 24.6),
    row(4.60, 170.0, 54.6, NAN, 86.3, 169.0, 24.5),
    row(4.61, 170.0, 54.5, NAN, 86.1, 168.0, 24.4),
    row(4.62, 169.0, 54.4, NAN, 85.9, 167.0, 24.2),
    row(4.63, 168.0, 54.3, NAN, 85.6, 167.0, 24.1),
    row(4.64, 167.0, 54.1, NAN, 85.4, 166.0, 24.0),
    row(4.65, 167.0, 54.0, NAN, 85.2, 165.0, 23.9),
    row(4.66, 166.0, 53.9, NAN, 85.0, 164.0, 23.7),
    row(4.67, 165.0, 53.8, NAN, 84.8, 164.0, 23.6),
    row(4.68, 164.0, 53.6, NAN, 84.6, 163.0, 23.5),
    row(4.69, 164.0, 53.5, NAN, 84.3, 162.0, 23.4),
    row(4.70, 163.0, 53.4, NAN, 84.1, 162.0, 23.2),
    row(4.71, 162.0, 53.3, NAN, 83.9, 161.0, 23.1),
    row(4.72, 161.0, 53.2, NAN, 83.7, 160.0, 23.0),
    row(4.73, 161.0, 53.0, NAN, 83.5, 160.0, 22.9),
    row(4.74, 160.0, 52.9, NAN, 83.2, 159.0, 22.7),
    row(4.75, 159.0, 52.8, NAN, 83.0, 158.0, 22.6),
    row(4.76, 158.0, 52.7, NAN, 82.8, 158.0, 22.5),
    row(4.77, 158.0, 52.6, NAN, 82.6, 157.0, 22.4),
    row(4.78, 157.0, 52.4, NAN, 82.4, 156.0, 22.3),
    row(4.79, 156.0, 52.3, NAN, 82.1, 156.0, 22.1),
    row(4.80, 156.0, 52.2, NAN, 81.9, 155.0, 22.0),
    row(4.81, 155.0, 52.1, NAN, 81.7, 154.0, 21.9),
    row(4.82, 154.0, 52.0, NAN, 81.5, 154.0, 21.8),
    row(4.83, 154.0, 51.8, NAN, 81.3, 153.0, 21.7),
    row(4.84, 153.0, 51.7, NAN, 81.0, 153.0, 21.6),
    row(4.85, 152.0, 51.6, NAN, 80.8, 152.0, 21.5),
    row(4.86, 152.0, 51.5, NAN, 80.6, 151.0, 21.4),
    row(4.87, 151.0, 51.3, NAN, 80.4, 151.0, 21.3),
    row(4.88, 150.0, 51.2, NAN, 80.1, 150.0, 21.2),
    row(4.89, 150.0, 51.1, NAN, 79.9, 150.0, 21.1),
    row(4.90, 149.0, 51.0, NAN, 79.7, 149.0, 21.0),
    row(4.91, 148.0, 50.9, NAN, 79.5, 148.0, 21.0),
    row(4.92, 148.0, 50.7, NAN, 79.2, 148.0, 20.9),
    row(4.93, 147.0, 50.6, NAN, 79.0, 147.0, 20.8),
    row(4.94, 146.0, 50.5, NAN, 78.8, 146.0, 20.8),
    row(4.95, 146.0, 50.4, NAN, 78.6, 146.0, 20.7),
    row(4.96, 145.0, 50.2, NAN, 78.3, 145.0, 20.7),
    row(4.97, 144.0, 50.1, NAN, 78.1, 144.0, 20.7),
    row(4.98, 144.0, 50.0, NAN, 77.9, 144.0, 20.6),
    row(4.99, 143.0, 49.8, NAN, 77.6, 143.0, 20.6),
    row(5.00, 143.0, NAN, NAN, 77.4, 143.0, 20.6),
    row(5.01, 142.0, NAN, NAN, 77.2, 142.0, NAN),
    row(5.02, 141.0, NAN, NAN, 77.0, 141.0, NAN),
    row(5.03, 141.0, NAN, NAN, 76.7, 141.0, NAN),
    row(5.04, 140.0, NAN, NAN, 76.5, 140.0, NAN),
    row(5.05, 140.0, NAN, NAN, 76.3, 140.0, NAN),
    row(5.06, 139.0, NAN, NAN, 76.0, 139.0, NAN),
    row(5.07, 138.0, NAN, NAN, 75.8, 138.0, NAN),
    row(5.08, 138.0, NAN, NAN, 75.6, 138.0, NAN),
    row(5.09, 137.0, NAN, NAN, 75.3, 137.0, NAN),
    row(5.10, 137.0, NAN, NAN, 75.1, 137.0, NAN),
    row(5.11, 136.0, NAN, NAN, 74.8, 136.0, NAN),
    row(5.12, 136.0, NAN, NAN, 74.6, 136.0, NAN),
    row(5.13, 135.0, NAN, NAN, 74.4, 135.0, NAN),
    row(5.14, 134.0, NAN, NAN, 74.1, 134.0, NAN),
    row(5.15, 134.0, NAN, NAN, 73.9, 134.0, NAN),
    row(5.16, 133.0, NAN, NAN, 73.7, 133.0, NAN),
    row(5.17, 133.0, NAN, NAN, 73.4, 133.0, NAN),
    row(5.18, 132.0, NAN, NAN, 73.2, 132.0, NAN),
    row(5.19, 132.0, NAN, NAN, 72.9, 132.0, NAN),
    row(5.20, 131.0, NAN, NAN, 72.7, 131.0, NAN),
    row(5.21, 131.0, NAN, NAN, 72.4, 131.0, NAN),
    row(5.22, 130.0, NAN, NAN, 72.2, 130.0, NAN),
    row(5.23, 129.0, NAN, NAN, 72.0, 129.0, NAN),
    row(5.24, 129.0, NAN, NAN, 71.7, 129.0, NAN),
    row(5.25, 128.0, NAN, NAN, 71.5, 128.0, NAN),
    row(5.26, 128.0, NAN, NAN, 71.2, 128.0, NAN),
    row(5.27, 127.0, NAN, NAN, 71.0, 127.0, NAN),
    row(5.28, 127.0, NAN, NAN, 70.7, 127.0, NAN),
    row(5.29, 126.0, NAN, NAN, 70.5, 126.0, NAN),
    row(5.30, 126.0, NAN, NAN, 70.2, 126.0, NAN),
    row(5.31, 125.0, NAN, NAN, 70.0, 125.0, NAN),
    row(5.32, 125.0, NAN, NAN, 69.7, 125.0, NAN),
    row(5.33, 124.0, NAN, NAN, 69.5, 124.0, NAN),
    row(5.34, 124.0, NAN, NAN, 69.2, 124.0, NAN),
    row(5.35, 123.0, NAN, NAN, 69.0, 123.0, NAN),
    row(5.36, 123.0, NAN, NAN, 68.7, 123.0, NAN),
    row(5.37, 122.0, NAN, NAN, 68.5, 122.0, NAN),
    row(5.38, 122.0, NAN, NAN, 68.2, 122.0, NAN),
    row(5.39, 121.0, NAN, NAN, 68.0, 121.0, NAN),
    row(5.40, 121.0, NAN, NAN, 67.7, 121.0, NAN),
    row(5.41, 120.0, NAN, NAN, 67.5, 120.0, NAN),
    row(5.42, 120.0, NAN, NAN, 67.2, 120.0, NAN),
    row(5.43, 119.0, NAN, NAN, 67.0, 119.0, NAN),
    row(5.44, 119.0, NAN, NAN, 66.7, 119.0, NAN),
    row(5.45, 118.0, NAN, NAN, 66.4, 118.0, NAN),
    row(5.46, 118.0, NAN, NAN, 66.2, 118.0, NAN),
    row(5.47, 117.0, NAN, NAN, 65.9, 117.0, NAN),
    row(5.48, 117.0, NAN, NAN, 65.7, 117.0, NAN),
    row(5.49, 116.0, NAN, NAN, 65.4, 116.0, NAN),
    row(5.50, 116.0, NAN, NAN, 65.2, 116.0, NAN),
    row(5.51, 115.0, NAN, NAN, 64.9, 115.0, NAN),
    row(5.52, 115.0, NAN, NAN, 64.6, 115.0, NAN),
    row(5.53, 115.0, NAN, NAN, 64.4, 115.0, NAN),
    row(5.54, 114.0, NAN, NAN, 64.1, 114.0, NAN),
    row(5.55, 114.0, NAN, NAN, 63.9, 114.0, NAN),
    row(5.56, 113.0, NAN, NAN, 63.6, 113.0, NAN),
    row(5.57, 113.0, NAN, NAN, 63.3, 113.0, NAN),
    row(5.58, 112.0, NAN, NAN, 63.1, 112.0, NAN),
    row(5.59, 112.0, NAN, NAN, 62.8, 112.0, NAN),
    row(5.60, 111.0, NAN, NAN, 62.6, 111.0, NAN),
    row(5.61, 111.0, NAN, NAN, 62.3, 111.0, NAN),
    row(5.62, 111.0, NAN, NAN, 62.0, 111.0, NAN),
    row(5.63, 110.0, NAN, NAN, 61.8, 110.0, NAN),
    row(5.64, 110.0, NAN, NAN, 61.5, 110.0, NAN),
    row(5.65, 109.0, NAN, NAN, 61.2, 109.0, NAN),
    row(5.66, 109.0, NAN, NAN, 61.0, 109.0, NAN),
    row(5.67, 108.0, NAN, NAN, 60.7, 108.0, NAN),
    row(5.68, 108.0, NAN, NAN, 60.5, 108.0, NAN),
    row(5.69, 108.0, NAN, NAN, 60.2, 108.0, NAN),
    row(5.70, 107.0, NAN, NAN, 59.9, 107.0, NAN),
    row(5.71, 107.0, NAN, NAN, 59.7, 107.0, NAN),
    row(5.72, 106.0, NAN, NAN, 59.4, 106.0, NAN),
    row(5.73, 106.0, NAN, NAN, 59.1, 106.0, NAN),
    row(5.74, 105.0, NAN, NAN, 58.9, 105.0, NAN),
    row(5.75, 105.0, NAN, NAN, 58.6, 105.0, NAN),
    row(5.76, 105.0, NAN, NAN, 58.3, 105.0, NAN),
    row(5.77, 104.0, NAN, NAN, 58.1, 104.0, NAN),
    row(5.78, 104.0, NAN, NAN, 57.8, 104.0, NAN),
    row(5.79, 103.0, NAN, NAN, 57.5, 103.0, NAN),
    row(5.80, 103.0, NAN, NAN, 57.3, 103.0, NAN),
    row(5.81, 103.0, NAN, NAN, 57.0, 103.0, NAN),
    row(5.82, 102.0, NAN, NAN, 56.8, 102.0, NAN),
    row(5.83, 102.0, NAN, NAN, 56.5, 102.0, NAN),
    row(5.84, 101.0, NAN, NAN, 56.2, 101.0, NAN),
    row(5.85, 101.0, NAN, NAN, 56.0, 101.0, NAN),
    row(5.86, 101.0, NAN, NAN, 55.7, 101.0, NAN),
    row(5.87, 100.0, NAN, NAN, 55.4, 100.0, NAN),
    row(5.88, 100.0, NAN, NAN, 55.2, 100.0, NAN),
    row(5.89, 100.0, NAN, NAN, 54.9, 100.0, NAN),
    row(5.90, 99.0, NAN, NAN, 54.6, NAN, NAN),
    row(5.91, 99.0, NAN, NAN, 54.4, NAN, NAN),
    row(5.92, 98.0, NAN, NAN, 54.1, NAN, NAN),
    row(5.93, 98.0, NAN, NAN, 53.9, NAN, NAN),
    row(5.94, 98.0, NAN, NAN, 53.6, NAN, NAN),
    row(5.95, 97.0, NAN, NAN, 53.3, NAN, NAN),
    row(5.96, 97.0, NAN, NAN, 53.1, NAN, NAN),
    row(5.97, 97.0, NAN, NAN, 52.8, NAN, NAN),
    row(5.98, 96.0, NAN, NAN, 52.5, NAN, NAN),
    row(5.99, 96.0, NAN, NAN, 52.3, NAN, NAN),
    row(6.00, 95.0, NAN, NAN, 52.0, NAN, NAN),
    row(6.01, 95.0, NAN, NAN, 51.8, NAN, NAN),
    row(6.02, 95.0, NAN, NAN, 51.5, NAN, NAN),
    row(6.03, 94.0, NAN, NAN, 51.2, NAN, NAN),
    row(6.04, 94.0, NAN, NAN, 51.0, NAN, NAN),
    row(6.05, 94.0, NAN, NAN, 50.7, NAN, NAN),
    row(6.06, 93.0, NAN, NAN, 50.5, NAN, NAN),
    row(6.07, 93.0, NAN, NAN, 50.2, NAN, NAN),
    row(6.08, 93.0, NAN, NAN, 50.0, NAN, NAN),
    row(6.09, 92.0, NAN, NAN, 49.7, NAN, NAN),
    row(6.10, 92.0, NAN, NAN, 49.4, NAN, NAN),
    row(6.11, 92.0, NAN, NAN, 49.2, NAN, NAN),
    row(6.12, 91.0, NAN, NAN, 48.9, NAN, NAN),
    row(6.13, 91.0, NAN, NAN, 48.7, NAN, NAN),
    row(6.14, 91.0, NAN, NAN, 48.4, NAN, NAN),
    row(6.15, 90.0, NAN, NAN, 48.2, NAN, NAN),
    row(6.16, 90.0, NAN, NAN, 47.9, NAN, NAN),
    row(6.17, 90.0, NAN, NAN, 47.7, NAN, NAN),
    row(6.18, 89.0, NAN, NAN, 47.4, NAN, NAN),
    row(6.19, 89.0, NAN, NAN, 47.2, NAN, NAN),
    row(6.20, 89.0, NAN, NAN, 46.9, NAN, NAN),
    row(6.21, 88.0, NAN, NAN, 46.7, NAN, NAN),
    row(6.22, 88.0, NAN, NAN, 46.4, NAN, NAN),
    row(6.23, 88.0, NAN, NAN, 46.2, NAN, NAN),
    row(6.24, 87.0, NAN, NAN, 45.9, NAN, NAN),
    row(6.25, 87.0, NAN, NAN, 45.7, NAN, NAN),
    row(6.26, 87.0, NAN, NAN, 45.4, NAN, NAN),
    row(6.27, 86.0, NAN, NAN, 45.2, NAN, NAN),
    row(6.28, 86.0, NAN, NAN, 44.9, NAN, NAN),
    row(6.29, 86.0, NAN, NAN, 44.7, NAN, NAN),
    row(6.30, 85.0, NAN, NAN, 44.4, NAN, NAN),
    row(6.31, 85.0, NAN, NAN, 44.2, NAN, NAN),
    row(6.32, 85.0, NAN, NAN, 43.9, NAN, NAN),
    row(6.33, 85.0, NAN, NAN, 43.7, NAN, NAN),
    row(6.34, 84.0, NAN, NAN, 43.5, NAN, NAN),
    row(6.35, 84.0, NAN, NAN, 43.2, NAN, NAN),
    row(6.36, 84.0, NAN, NAN, 43.0, NAN, NAN),
    row(6.37, 83.0, NAN, NAN, 42.7, NAN, NAN),
    row(6.38, 83.0, NAN, NAN, 42.5, NAN, NAN),
    row(6.39, 83.0, NAN, NAN, 42.2, NAN, NAN),
    row(6.40, 82.0, NAN, NAN, 42.0, NAN, NAN),
    row(6.41, 82.0, NAN, NAN, 41.8, NAN, NAN),
    row(6.42, 82.0, NAN, NAN, 41.5, NAN, NAN),
    row(6.43, 82.0, NAN, NAN, 41.3, NAN, NAN),
    row(6.44, 81.0, NAN, NAN, 41.0, NAN, NAN),
    row(6.45, 81.0, NAN, NAN, 40.8, NAN, NAN),
    row(6.46, 81.0, NAN, NAN, 40.6, NAN, NAN),
    row(6.47, 80.0, NAN, NAN, 40.3, NAN, NAN),
    row(6.48, 80.0, NAN, NAN, 40.1, NAN, NAN),
    row(6.49, 80.0, NAN, NAN, 39.8, NAN, NAN),
    row(6.50, 80.0, NAN, NAN, 39.6, NAN, NAN),
    row(6.51, 79.0, NAN, NAN, 39.4, NAN, NAN),
    row(6.52, 79.0, NAN, NAN, 39.1, NAN, NAN),
    row(6.53, 79.0, NAN, NAN, 38.9, NAN, NAN),
    row(6.54, 79.0, NAN, NAN, 38.6, NAN, NAN),
    row(6.55, 78.0, NAN, NAN, 38.4, NAN, NAN),
    row(6.56, 78.0, NAN, NAN, 38.1, NAN, NAN),
    row(6.57, 78.0, NAN, NAN, 37.9, NAN, NAN),
    row(6.58, 78.0, NAN, NAN, 37.7, NAN, NAN),
    row(6.59, 77.0, NAN, NAN, 37.4, NAN, NAN),
    row(6.60, 77.0, NAN, NAN, 37.2, NAN, NAN),
    row(6.61, 77.0, NAN, NAN, 36.9, NAN, NAN),
    row(6.62, 77.0, NAN, NAN, 36.7, NAN, NAN),
    row(6.63, 76.0, NAN, NAN, 36.4, NAN, NAN),
    row(6.64, 76.0, NAN, NAN, 36.2, NAN, NAN),
    row(6.65, 76.0, NAN, NAN, 35.9, NAN, NAN),
    row(6.66, 76.0, NAN, NAN, 35.7, NAN, NAN),
    row(6.67, 75.0, NAN, NAN, 35.4, NAN, NAN),
    row(6.68, 75.0, NAN, NAN, 35.2, NAN, NAN),
    row(6.69, 75.0, NAN, NAN, 34.9, NAN, NAN),
    row(6.70, 75.0, NAN, NAN, 34.7, NAN, NAN),
];

const fn row(d10mm: f64, hb: f64, hra: f64, hrc: f64, hrb: f64, hv: f64, hsd: f64) -> HardnessRecord {
    HardnessRecord::new(d10mm, hb, hra, hrc, hrb, hv, hsd)
}
