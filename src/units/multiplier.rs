//! 단위 문자열 → SI 기준 배율.
//!
//! `kg*m/s2`, `km/h^2`, `g/cm3`, `MPa` 처럼 접두어, 곱/나눗셈, 거듭제곱(`^n` 또는 뒤에 붙은 숫자)을
//! 조합한 표기를 해석한다. 나눗셈은 바로 뒤의 인자 하나에만 적용된다.

use super::prefix::{find_prefix, PREFIXES};
use super::UnitError;

/// 접두어 없이 쓰는 기본 단위와 SI 배율. 질량의 SI 기준은 kg 이므로 g = 1e-3.
const BASE_UNITS: &[(&str, f64)] = &[
    ("g", 1e-3),
    ("m", 1.0),
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("Pa", 1.0),
    ("N", 1.0),
    ("J", 1.0),
    ("W", 1.0),
    ("K", 1.0),
    ("A", 1.0),
    ("V", 1.0),
    ("Hz", 1.0),
    ("mol", 1.0),
    ("L", 1e-3),
    ("t", 1e3),
];

/// 단위 문자열의 SI 배율. 빈 문자열은 무차원(1)이다. 공백은 무시한다.
pub fn multiplier(unit: &str) -> Result<f64, UnitError> {
    let compact: String = unit.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(1.0);
    }

    let mut total = 1.0;
    // 직전 인자의 (배율, 지수). `^n` 토큰이 이를 수정한다.
    let mut last: Option<(f64, f64)> = None;
    for token in split_by_operators(&compact) {
        let (sign, body) = match token.chars().next() {
            Some('*') => (1.0, &token[1..]),
            Some('/') => (-1.0, &token[1..]),
            Some('^') => {
                let power: f64 = token[1..]
                    .parse()
                    .map_err(|_| UnitError::InvalidExponent(token.clone()))?;
                let (base, exponent) = last.ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))?;
                total *= base.powf(exponent * power - exponent);
                last = Some((base, exponent * power));
                continue;
            }
            _ => (1.0, token.as_str()),
        };
        let (symbol, power) = extract_power(body);
        let base = base_multiplier(symbol).ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))?;
        let exponent = sign * power;
        total *= base.powf(exponent);
        last = Some((base, exponent));
    }
    Ok(total)
}

/// 연산자(`*`, `/`, `^`) 앞에서 자른다. 연산자는 뒤 토큰의 첫 글자로 남는다.
///
/// `kg*m/s2` → `["kg", "*m", "/s2"]`, `km/h^2` → `["km", "/h", "^2"]`
pub fn split_by_operators(unit: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in unit.chars() {
        if matches!(c, '*' | '/' | '^') && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// 토큰 끝의 거듭제곱을 분리한다. `m2` → (`m`, 2), `m^3` → (`m`, 3), `kg` → (`kg`, 1).
pub fn extract_power(token: &str) -> (&str, f64) {
    if let Some((base, power)) = token.split_once('^') {
        if let Ok(p) = power.parse::<f64>() {
            return (base, p);
        }
        return (token, 1.0);
    }
    let digits_start = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map_or(token.len(), |(i, _)| i);
    if digits_start == 0 || digits_start == token.len() {
        return (token, 1.0);
    }
    match token[digits_start..].parse::<f64>() {
        Ok(p) => (&token[..digits_start], p),
        Err(_) => (token, 1.0),
    }
}

/// 기본 단위를 먼저 찾고, 없으면 접두어 + 기본 단위로 해석한다.
fn base_multiplier(symbol: &str) -> Option<f64> {
    if let Some(&(_, m)) = BASE_UNITS.iter().find(|(s, _)| *s == symbol) {
        return Some(m);
    }
    // 긴 접두어(da)부터 시도
    let mut candidates: Vec<&str> = PREFIXES
        .iter()
        .map(|p| p.symbol)
        .filter(|s| !s.is_empty())
        .chain(std::iter::once("u"))
        .collect();
    candidates.sort_by_key(|s| std::cmp::Reverse(s.len()));
    candidates.into_iter().find_map(|p| {
        let rest = symbol.strip_prefix(p)?;
        let &(_, m) = BASE_UNITS.iter().find(|(s, _)| *s == rest)?;
        Some(find_prefix(p)?.multiplier * m)
    })
}
