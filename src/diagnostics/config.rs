use std::str::FromStr;

/// Selects which lines of an input file a stage will emit trace events for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TracingConfig {
    All,
    Between(usize, usize),
    Before(usize),
    After(usize),
    Only(usize),
    Off,
}

impl TracingConfig {
    /// Returns true if events on line `ln` should be traced.
    pub fn includes(&self, ln: usize) -> bool {
        match *self {
            TracingConfig::All => true,
            TracingConfig::Only(only) => ln == only,
            TracingConfig::Before(end) => ln <= end,
            TracingConfig::After(start) => ln >= start,
            TracingConfig::Between(start, end) => ln >= start && ln <= end,
            TracingConfig::Off => false,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig::Off
    }
}

/// Parses the line selection given on the command line:
/// `all`, `off`, `N`, `..N`, `N..`, or `N..M`.
impl FromStr for TracingConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            n.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid line number in trace range: {}", s))
        };

        match s.trim() {
            "all" => Ok(TracingConfig::All),
            "off" => Ok(TracingConfig::Off),
            s => match s.split_once("..") {
                None => Ok(TracingConfig::Only(parse(s)?)),
                Some(("", "")) => Ok(TracingConfig::All),
                Some(("", end)) => Ok(TracingConfig::Before(parse(end)?)),
                Some((start, "")) => Ok(TracingConfig::After(parse(start)?)),
                Some((start, end)) => {
                    let (start, end) = (parse(start)?, parse(end)?);
                    if start > end {
                        Err(format!("Trace range start is after its end: {}", s))
                    } else {
                        Ok(TracingConfig::Between(start, end))
                    }
                }
            },
        }
    }
}
