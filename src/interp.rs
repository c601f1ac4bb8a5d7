//! 표 데이터 기반 1차원 보간기.
//!
//! 경도 환산표와 재료 물성 곡선이 공통으로 사용한다. 한 번 생성한 보간기는 변경되지
//! 않으므로 여러 스레드에서 동시에 조회해도 된다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 지원하는 최대 보간 차수.
pub const MAX_ORDER: u8 = 3;

/// 데이터 범위 밖 입력의 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutOfRange {
    /// 정의되지 않은 값(NaN)을 반환한다.
    Nan,
    /// 가장자리 구간의 다항식을 그대로 연장한다.
    Extrapolate,
}

/// 같은 x에 여러 y가 있을 때 하나로 합치는 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregation {
    Mean,
    Median,
}

impl Aggregation {
    /// 값 묶음을 하나의 대표값으로 줄인다. 빈 묶음은 NaN.
    pub fn apply(self, values: &mut [f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        match self {
            Aggregation::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Aggregation::Median => {
                values.sort_by(|a, b| a.total_cmp(b));
                let n = values.len();
                if n % 2 == 1 {
                    values[n / 2]
                } else {
                    0.5 * (values[n / 2 - 1] + values[n / 2])
                }
            }
        }
    }
}

/// 보간기 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("x/y 길이 불일치: x={x}, y={y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("{order}차 보간에는 최소 {required}개의 점이 필요함 (입력 {actual}개)")]
    TooFewPoints {
        order: u8,
        required: usize,
        actual: usize,
    },
    #[error("x가 순증가하지 않음 (index {index})")]
    NotIncreasing { index: usize },
    #[error("유한하지 않은 값 (index {index})")]
    NonFinite { index: usize },
    #[error("지원하지 않는 보간 차수: {0} (0..=3)")]
    UnsupportedOrder(u8),
}

/// 구간별 다항식 보간기.
///
/// 차수별 의미:
/// - 0: 직전 점의 값을 유지하는 계단 함수
/// - 1: 선형
/// - 2: 1차 도함수가 연속인 2차 스플라인 (처음 세 점을 지나는 포물선에서 시작)
/// - 3: 자연 3차 스플라인 (양 끝 2차 도함수 = 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolant {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// 구간 i의 계수 [c0, c1, c2, c3]. dx = x - xs[i]
    segments: Vec<[f64; 4]>,
    order: u8,
    out_of_range: OutOfRange,
}

impl Interpolant {
    /// 정렬된 점들로 보간기를 만든다. x는 순증가해야 한다.
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        order: u8,
        out_of_range: OutOfRange,
    ) -> Result<Self, InterpolationError> {
        if order > MAX_ORDER {
            return Err(InterpolationError::UnsupportedOrder(order));
        }
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        let required = order as usize + 1;
        if xs.len() < required {
            return Err(InterpolationError::TooFewPoints {
                order,
                required,
                actual: xs.len(),
            });
        }
        for (index, (x, y)) in xs.iter().zip(&ys).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(InterpolationError::NonFinite { index });
            }
        }
        if let Some(index) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
            return Err(InterpolationError::NotIncreasing { index });
        }

        let segments = match order {
            0 => ys[..ys.len() - 1]
                .iter()
                .map(|&y| [y, 0.0, 0.0, 0.0])
                .collect(),
            1 => linear_segments(&xs, &ys),
            2 => quadratic_segments(&xs, &ys),
            _ => natural_cubic_segments(&xs, &ys),
        };

        Ok(Self {
            xs,
            ys,
            segments,
            order,
            out_of_range,
        })
    }

    /// 정렬되지 않은 표본(중복 x 포함)으로 보간기를 만든다.
    /// 유한하지 않은 쌍은 버리고, 같은 x의 y는 `aggregation`으로 합친다.
    pub fn from_samples<I>(
        pairs: I,
        aggregation: Aggregation,
        order: u8,
        out_of_range: OutOfRange,
    ) -> Result<Self, InterpolationError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = collapse_duplicates(pairs, aggregation);
        Self::new(xs, ys, order, out_of_range)
    }

    /// x 위치의 값을 계산한다. 범위 밖은 `OutOfRange` 정책을 따른다.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.xs.len() - 1;
        if x < self.xs[0] || x > self.xs[last] {
            return match self.out_of_range {
                OutOfRange::Nan => f64::NAN,
                OutOfRange::Extrapolate => self.extrapolate(x),
            };
        }
        // 구간 탐색: xs[i] <= x 인 마지막 i
        let i = self.xs.partition_point(|&v| v <= x) - 1;
        if self.xs[i] == x {
            return self.ys[i];
        }
        polynomial(&self.segments[i], x - self.xs[i])
    }

    fn extrapolate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if self.segments.is_empty() || self.order == 0 {
            return if x < self.xs[0] {
                self.ys[0]
            } else {
                self.ys[last]
            };
        }
        if x < self.xs[0] {
            polynomial(&self.segments[0], x - self.xs[0])
        } else {
            let i = self.segments.len() - 1;
            polynomial(&self.segments[i], x - self.xs[i])
        }
    }

    /// 데이터가 정의된 x 구간 [min, max].
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn order(&self) -> u8 {
        self.order
    }

    pub fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// 유한한 (x, y) 쌍만 남겨 x 오름차순으로 정렬하고 중복 x를 하나로 합친다.
pub fn collapse_duplicates<I>(pairs: I, aggregation: Aggregation) -> (Vec<f64>, Vec<f64>)
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut points: Vec<(f64, f64)> = pairs
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut group: Vec<f64> = Vec::new();
    let mut current: Option<f64> = None;
    for (x, y) in points {
        if current != Some(x) {
            if let Some(cx) = current {
                xs.push(cx);
                ys.push(aggregation.apply(&mut group));
                group.clear();
            }
            current = Some(x);
        }
        group.push(y);
    }
    if let Some(cx) = current {
        xs.push(cx);
        ys.push(aggregation.apply(&mut group));
    }
    (xs, ys)
}

fn polynomial(c: &[f64; 4], dx: f64) -> f64 {
    c[0] + dx * (c[1] + dx * (c[2] + dx * c[3]))
}

fn linear_segments(xs: &[f64], ys: &[f64]) -> Vec<[f64; 4]> {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| [y[0], (y[1] - y[0]) / (x[1] - x[0]), 0.0, 0.0])
        .collect()
}

fn quadratic_segments(xs: &[f64], ys: &[f64]) -> Vec<[f64; 4]> {
    let slopes: Vec<f64> = xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect();
    let h0 = xs[1] - xs[0];
    let h1 = xs[2] - xs[1];
    // 처음 세 점을 지나는 포물선의 x0 기울기
    let mut d = slopes[0] - h0 * (slopes[1] - slopes[0]) / (h0 + h1);

    let mut segments = Vec::with_capacity(slopes.len());
    for (i, &s) in slopes.iter().enumerate() {
        let h = xs[i + 1] - xs[i];
        segments.push([ys[i], d, (s - d) / h, 0.0]);
        d = 2.0 * s - d;
    }
    segments
}

fn natural_cubic_segments(xs: &[f64], ys: &[f64]) -> Vec<[f64; 4]> {
    let n = xs.len();
    let mut m = vec![0.0; n];
    let mut u = vec![0.0; n];

    // 삼중대각 연립방정식 전진 소거
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * m[i - 1] + 2.0;
        m[i] = (sig - 1.0) / p;
        let du = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * du / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }
    m[n - 1] = 0.0;
    for k in (0..n - 1).rev() {
        m[k] = m[k] * m[k + 1] + u[k];
    }

    (0..n - 1)
        .map(|i| {
            let h = xs[i + 1] - xs[i];
            [
                ys[i],
                (ys[i + 1] - ys[i]) / h - h * (2.0 * m[i] + m[i + 1]) / 6.0,
                m[i] / 2.0,
                (m[i + 1] - m[i]) / (6.0 * h),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint_and_bounds() {
        let f = Interpolant::new(vec![0.0, 1.0, 3.0], vec![0.0, 10.0, 30.0], 1, OutOfRange::Nan)
            .unwrap();
        assert!((f.evaluate(0.5) - 5.0).abs() < 1e-12);
        assert!((f.evaluate(2.0) - 20.0).abs() < 1e-12);
        assert_eq!(f.evaluate(3.0), 30.0);
        assert!(f.evaluate(-0.1).is_nan());
        assert!(f.evaluate(3.1).is_nan());
        assert!(f.evaluate(f64::NAN).is_nan());
    }

    #[test]
    fn linear_extrapolates_with_edge_slope() {
        let f = Interpolant::new(vec![0.0, 1.0], vec![0.0, 2.0], 1, OutOfRange::Extrapolate)
            .unwrap();
        assert!((f.evaluate(2.0) - 4.0).abs() < 1e-12);
        assert!((f.evaluate(-1.0) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_order_holds_previous_value() {
        let f = Interpolant::new(vec![0.0, 1.0, 2.0], vec![5.0, 6.0, 7.0], 0, OutOfRange::Nan)
            .unwrap();
        assert_eq!(f.evaluate(0.99), 5.0);
        assert_eq!(f.evaluate(1.0), 6.0);
        assert_eq!(f.evaluate(2.0), 7.0);

        let c = Interpolant::new(vec![273.15], vec![42.0], 0, OutOfRange::Extrapolate).unwrap();
        assert_eq!(c.evaluate(-1e6), 42.0);
        assert_eq!(c.evaluate(1e6), 42.0);
    }

    #[test]
    fn quadratic_reproduces_parabola() {
        let xs = vec![0.0, 1.0, 2.5, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| x * x - 2.0 * x + 1.0).collect();
        let f = Interpolant::new(xs, ys, 2, OutOfRange::Nan).unwrap();
        for x in [0.3, 1.7, 3.2] {
            assert!((f.evaluate(x) - (x * x - 2.0 * x + 1.0)).abs() < 1e-9, "x={x}");
        }
    }

    #[test]
    fn cubic_reproduces_straight_line() {
        let xs = vec![0.0, 1.0, 2.0, 5.0, 6.0];
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
        let f = Interpolant::new(xs, ys, 3, OutOfRange::Nan).unwrap();
        assert!((f.evaluate(3.3) - 10.9).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_points() {
        assert_eq!(
            Interpolant::new(vec![0.0, 1.0], vec![0.0], 1, OutOfRange::Nan),
            Err(InterpolationError::LengthMismatch { x: 2, y: 1 })
        );
        assert_eq!(
            Interpolant::new(vec![0.0, 0.0, 1.0], vec![0.0, 1.0, 2.0], 1, OutOfRange::Nan),
            Err(InterpolationError::NotIncreasing { index: 1 })
        );
        assert!(matches!(
            Interpolant::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0], 3, OutOfRange::Nan),
            Err(InterpolationError::TooFewPoints { required: 4, .. })
        ));
        assert_eq!(
            Interpolant::new(vec![0.0], vec![0.0], 4, OutOfRange::Nan),
            Err(InterpolationError::UnsupportedOrder(4))
        );
    }

    #[test]
    fn collapse_mean_and_median() {
        let pairs = [(2.0, 1.0), (1.0, 4.0), (2.0, 3.0), (2.0, 8.0), (f64::NAN, 1.0)];
        let (xs, ys) = collapse_duplicates(pairs, Aggregation::Mean);
        assert_eq!(xs, vec![1.0, 2.0]);
        assert_eq!(ys, vec![4.0, 4.0]);
        let (_, ys) = collapse_duplicates(pairs, Aggregation::Median);
        assert_eq!(ys, vec![4.0, 3.0]);
    }
}
