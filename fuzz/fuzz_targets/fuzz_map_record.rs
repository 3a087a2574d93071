#![no_main]

use libfuzzer_sys::fuzz_target;
use topomap_editor::{MapFileRecord, TopologyMap};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parser darf bei beliebigen Eingaben nicht paniken
    if let Ok(record) = MapFileRecord::from_json(text) {
        let map = TopologyMap::from_data(&record.topology_data);
        let _ = map.dangling_edges();
        let _ = map.to_data();
    }
});
