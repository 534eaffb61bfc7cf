/// One recorded work session, as stored in the staging file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerInterval {
    pub start: f64,       // ⇔ first field (epoch seconds)
    pub end: Option<f64>, // ⇔ second field, empty while the timer runs
}

impl TimerInterval {
    pub fn open(start: f64) -> Self {
        Self { start, end: None }
    }

    pub fn closed(start: f64, end: f64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// End used for reporting: the recorded one, or `now` while running.
    pub fn effective_end(&self, now: f64) -> f64 {
        self.end.unwrap_or(now)
    }

    /// Duration in seconds; open intervals are measured against `now`.
    pub fn duration(&self, now: f64) -> f64 {
        self.effective_end(now) - self.start
    }

    /// Serialize to a staging line (without the trailing newline).
    ///
    /// Floats are written with `{:?}` so integral values keep their `.0`
    /// suffix, e.g. `1718000000.0,1718003600.5`.
    pub fn to_line(&self) -> String {
        match self.end {
            Some(end) => format!("{:?},{:?}", self.start, end),
            None => format!("{:?},", self.start),
        }
    }

    /// Parse a single staging line. The error is a human readable reason,
    /// the caller attaches the file and line number.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() != 2 {
            return Err(format!(
                "expected 2 comma-separated fields, found {} in '{}'",
                fields.len(),
                line
            ));
        }

        let start = parse_epoch(fields[0])
            .ok_or_else(|| format!("invalid start timestamp '{}'", fields[0]))?;

        let end = match fields[1].trim() {
            "" => None,
            raw => Some(
                parse_epoch(raw).ok_or_else(|| format!("invalid end timestamp '{}'", raw))?,
            ),
        };

        Ok(Self { start, end })
    }
}

fn parse_epoch(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
