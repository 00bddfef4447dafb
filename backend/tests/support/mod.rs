#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use starscape::models::{StarComponent, StarRecord};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process-global environment across parallel tests.
///
/// `Some(v)` sets a variable, `None` removes it.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// A small HYG-style export: the Sun, five neighbours, one star beyond 60 ly
/// and one row with an unreadable distance.
pub const RAW_CSV: &str = "\
id,hip,hd,hr,gl,bf,proper,ra,dec,dist,spect
0,,,,,,Sol,0.000000,0.000000,0.0000,G2V
70666,70890,,,Gl 551,,Proxima Centauri,14.495985,-62.679485,1.2959,M5Ve
71453,71683,128620,5459,Gl 559A,Alp1Cen,Rigil Kentaurus,14.660765,-60.833976,1.3248,G2V
87666,87937,,,Gl 699,,Barnard's Star,17.963472,4.693388,1.8238,sdM4
32263,32349,48915,2491,Gl 244A,9Alp CMa,Sirius,6.752481,-16.716116,2.6371,A0m...
54035,54211,,,Gl 411,,,11.055714,35.969876,2.5469,M2V
91262,91262,172167,7001,Gl 721,3Alp Lyr,Vega,18.615649,38.783692,7.6787,A0Vvar
99999,,,,,,,1.0,1.0,xyz,K0
";

pub fn write_raw_csv(dir: &Path) -> PathBuf {
    let path = dir.join("hygdata_v3.csv");
    std::fs::write(&path, RAW_CSV).unwrap();
    path
}

pub fn star(name: &str, distance_ly: f64, ra: &str, dec: &str, spectral_type: &str) -> StarRecord {
    StarRecord {
        name: name.to_string(),
        distance_ly,
        distance_pc: distance_ly / 3.26,
        ra: ra.to_string(),
        dec: dec.to_string(),
        components: vec![StarComponent::new(name, spectral_type)],
    }
}

/// Five nearby stars, sorted by distance.
pub fn sample_catalog() -> Vec<StarRecord> {
    vec![
        star("Proxima Centauri", 4.22, "14h29m46s", "−62°40′46″", "M5Ve"),
        star("Rigil Kentaurus", 4.32, "14h39m39s", "−60°50′02″", "G2V"),
        star("Barnard's Star", 5.95, "17h57m48s", "+04°41′36″", "M4Ve"),
        star("Sirius", 8.6, "06h45m09s", "−16°42′58″", "A0m..."),
        star("Vega", 25.03, "18h36m56s", "+38°47′01″", "A0Vvar"),
    ]
}
