// Builders for Awesome Miner API response bodies

use serde_json::{json, Value};

pub fn status(display: &str) -> Value {
    json!({ "statusDisplay": display, "statusLine3": "" })
}

pub fn speed() -> Value {
    json!({ "hashrate": "240 MH/s", "hashrateValue": 240000000.0, "avgHashrate": "238 MH/s" })
}

pub fn device(name: &str, memory_clock: i64) -> Value {
    json!({
        "name": name,
        "statusInfo": status("Mining"),
        "deviceInfo": {
            "deviceType": "GPU",
            "gpuClock": 1365,
            "gpuMemoryClock": memory_clock,
            "fanPercent": 65,
            "temperature": 58
        },
        "speedInfo": speed()
    })
}

/// GPU list whose devices report the given memory clocks
pub fn gpus(memory_clocks: &[i64]) -> Value {
    Value::Array(
        memory_clocks
            .iter()
            .enumerate()
            .map(|(i, clock)| device(&format!("GPU {}", i), *clock))
            .collect(),
    )
}

fn base_miner(name: &str, host: &str, status_display: &str) -> Value {
    json!({
        "name": name,
        "hostname": host,
        "pool": "stratum+tcp://eth.pool.example:4444",
        "temperature": "61 ºC",
        "statusInfo": status(status_display),
        "speedInfo": speed(),
        "coinInfo": {
            "displayName": "Ethereum",
            "revenuePerDay": "$4.12",
            "revenuePerDayValue": 4.12
        }
    })
}

pub fn gpu_miner(name: &str, host: &str, status_display: &str, memory_clocks: &[i64]) -> Value {
    let mut miner = base_miner(name, host, status_display);
    miner["gpuList"] = gpus(memory_clocks);
    miner
}

pub fn asic_miner(name: &str, host: &str, boards: usize) -> Value {
    let mut miner = base_miner(name, host, "Mining");
    miner["asicList"] = Value::Array(
        (0..boards)
            .map(|i| device(&format!("ASIC {}", i), 0))
            .collect(),
    );
    miner
}

pub fn group(name: &str, miners: Vec<Value>) -> Value {
    json!({ "name": name, "minerList": miners })
}

pub fn miners_response(groups: Vec<Value>) -> Value {
    json!({ "groupList": groups })
}

pub fn notification(miner: &str, source: &str, message: &str) -> Value {
    json!({ "minerName": miner, "source": source, "message": message })
}
