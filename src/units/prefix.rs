/// SI 접두어.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prefix {
    pub symbol: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
}

const fn prefix(symbol: &'static str, name: &'static str, multiplier: f64) -> Prefix {
    Prefix {
        symbol,
        name,
        multiplier,
    }
}

/// 퀙토(1e-30)부터 퀘타(1e30)까지. 배율은 모두 서로 다르다.
pub const PREFIXES: &[Prefix] = &[
    prefix("q", "quecto", 1e-30),
    prefix("r", "ronto", 1e-27),
    prefix("y", "yocto", 1e-24),
    prefix("z", "zepto", 1e-21),
    prefix("a", "atto", 1e-18),
    prefix("f", "femto", 1e-15),
    prefix("p", "pico", 1e-12),
    prefix("n", "nano", 1e-9),
    prefix("μ", "micro", 1e-6),
    prefix("m", "milli", 1e-3),
    prefix("c", "centi", 1e-2),
    prefix("d", "deci", 1e-1),
    prefix("", "", 1.0),
    prefix("da", "deca", 1e1),
    prefix("h", "hecto", 1e2),
    prefix("k", "kilo", 1e3),
    prefix("M", "mega", 1e6),
    prefix("G", "giga", 1e9),
    prefix("T", "tera", 1e12),
    prefix("P", "peta", 1e15),
    prefix("E", "exa", 1e18),
    prefix("Z", "zetta", 1e21),
    prefix("Y", "yotta", 1e24),
    prefix("R", "ronna", 1e27),
    prefix("Q", "quetta", 1e30),
];

/// 기호로 접두어를 찾는다. `u`는 `μ`의 ASCII 대체 표기로 받는다.
pub fn find_prefix(symbol: &str) -> Option<&'static Prefix> {
    let symbol = if symbol == "u" { "μ" } else { symbol };
    PREFIXES.iter().find(|p| p.symbol == symbol)
}
