use rigmon::core::awesome_miner::{
    ClassifiedMiner, FaultCheckable, FleetProfile, FleetRegistry, GpuMiner, Miner,
};
use rigmon::RigmonError;

use super::fixtures::{asic_miner, gpu_miner};

#[test]
fn test_miner_from_json() {
    let miner = Miner::from_json(&gpu_miner("Pang01", "192.168.0.11", "Mining", &[4100])).unwrap();
    assert_eq!(miner.name, "Pang01");
    assert_eq!(miner.host, "192.168.0.11");
    assert_eq!(miner.temperature, "61 ºC");
    assert_eq!(miner.coin_info.name, "Ethereum");
    assert_eq!(miner.coin_info.daily_revenue_value, 4.12);
    assert!(miner.is_running());
}

#[test]
fn test_stopped_miner_is_not_running() {
    let miner = Miner::from_json(&gpu_miner("Pang01", "192.168.0.11", "Stopped", &[])).unwrap();
    assert!(!miner.is_running());
}

#[test]
fn test_missing_miner_field_is_malformed() {
    let mut json = gpu_miner("Pang01", "192.168.0.11", "Mining", &[]);
    json.as_object_mut().unwrap().remove("pool");

    match Miner::from_json(&json) {
        Err(RigmonError::MalformedResponse { entity, field }) => {
            assert_eq!(entity, "Miner");
            assert_eq!(field, "pool");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_registered_group_builds_gpu_miner() {
    let registry = FleetRegistry::default();
    let json = gpu_miner("Pang01", "192.168.0.11", "Mining", &[4100; 8]);

    let miner = registry.classify("Pang", &json).unwrap();
    match &miner {
        ClassifiedMiner::Gpu(gpu) => {
            assert_eq!(gpu.fleet, FleetProfile::pangolin());
            assert_eq!(gpu.device_list.len(), 8);
        }
        other => panic!("expected GPU miner, got {:?}", other),
    }
    assert!(miner.fault_checks().is_some());
}

#[test]
fn test_unregistered_group_falls_back_to_asic() {
    let registry = FleetRegistry::default();
    let miner = registry
        .classify("Antminer", &asic_miner("S9-01", "192.168.0.40", 3))
        .unwrap();

    assert!(matches!(miner, ClassifiedMiner::Asic(_)));
    assert_eq!(miner.device_list().len(), 3);
    assert!(miner.fault_checks().is_none());
}

#[test]
fn test_gpu_group_without_gpu_list_is_malformed() {
    let registry = FleetRegistry::default();
    let result = registry.classify("Ferm", &asic_miner("Ferm01", "192.168.0.31", 6));
    assert!(matches!(
        result,
        Err(RigmonError::MalformedResponse { field: "gpuList", .. })
    ));
}

#[test]
fn test_asic_fault_checks_are_unsupported() {
    let miner = FleetRegistry::default()
        .classify("Antminer", &asic_miner("S9-01", "192.168.0.40", 3))
        .unwrap();

    assert!(matches!(
        miner.all_devices_running(),
        Err(RigmonError::UnsupportedOperation {
            operation: "all_devices_running",
            variant: "ASIC"
        })
    ));
    assert!(matches!(
        miner.get_faulty_devices(),
        Err(RigmonError::UnsupportedOperation { .. })
    ));
}

#[test]
fn test_all_devices_running_requires_exact_count() {
    for (count, expected) in [(8, true), (7, false), (9, false), (0, false)] {
        let clocks = vec![4100; count];
        let gpu = GpuMiner::from_json(
            &gpu_miner("Pang01", "192.168.0.11", "Mining", &clocks),
            FleetProfile::pangolin(),
        )
        .unwrap();
        assert_eq!(gpu.all_devices_running(), expected, "{} GPUs", count);
    }
}

#[test]
fn test_faulty_devices_match_default_clock_exactly() {
    let gpu = GpuMiner::from_json(
        &gpu_miner(
            "Ferm01",
            "192.168.0.31",
            "Mining",
            &[3802, 3801, 3803, 3802, 4007, 3900],
        ),
        FleetProfile::ferm(),
    )
    .unwrap();

    let faulty: Vec<_> = gpu.get_faulty_devices().iter().map(|d| d.name.clone()).collect();
    assert_eq!(faulty, ["GPU 0", "GPU 3"]);
    assert!(gpu.all_devices_running());
}

#[test]
fn test_configured_clock_drives_fault_detection() {
    let mut registry = FleetRegistry::default();
    registry.register(FleetProfile::new("Ferm", 6, 3847));

    let miner = registry
        .classify("Ferm", &gpu_miner("Ferm01", "192.168.0.31", "Mining", &[3802, 3847]))
        .unwrap();
    let faulty = miner.get_faulty_devices().unwrap();
    assert_eq!(faulty.len(), 1);
    assert_eq!(faulty[0].device_info.memory_clock, 3847);
    assert!(!miner.all_devices_running().unwrap());
}
