// SaveStore tests against a real directory tree

#[cfg(test)]
mod tests {
    use crate::directories::Directories;
    use crate::game::Game;
    use crate::saves::{MAX_STATES, SaveCategory, SaveStore, StateLocation};
    use crate::{SaveError, StoreConfig};
    use std::path::Path;

    const CORE: &str = "fceumm";

    fn mario() -> Game {
        Game::new("mario.nes", "nes")
    }

    fn store(root: &Path) -> SaveStore {
        SaveStore::new(Directories::under(root))
    }

    fn put_legacy(root: &Path, name: &str, data: &[u8]) {
        let legacy = root.join("states-legacy");
        std::fs::create_dir_all(&legacy).unwrap();
        std::fs::write(legacy.join(name), data).unwrap();
    }

    #[test]
    fn every_slot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        for i in 0..MAX_STATES {
            let data = vec![i as u8; 16 + i];
            saves
                .write_state(&mario(), CORE, SaveCategory::SlotState(i), &data)
                .unwrap();
            let read = saves
                .read_state(&mario(), CORE, SaveCategory::SlotState(i))
                .unwrap();
            assert_eq!(read, Some(data));
        }
        assert!(dir.path().join("states/fceumm/mario.nes.slot4").is_file());
    }

    #[test]
    fn unwritten_state_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        assert_eq!(saves.auto_save(&mario(), CORE).unwrap(), None);
        assert_eq!(saves.slot_save(&mario(), CORE, 2).unwrap(), None);
    }

    #[test]
    fn reads_do_not_create_state_directories() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        saves.list_slot_info(&mario(), CORE).unwrap();
        saves.auto_save(&mario(), CORE).unwrap();
        assert!(!dir.path().join("states").exists());
    }

    #[test]
    fn ram_save_uses_srm_name() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        saves.write_ram(&Game::new("mario.nes", "nes"), b"nes").unwrap();
        saves.write_ram(&Game::new("mario.zip", "nes"), b"zip").unwrap();

        let srm = dir.path().join("saves/mario.srm");
        assert_eq!(std::fs::read(srm).unwrap(), b"zip");
        assert_eq!(saves.read_ram(&mario()).unwrap(), Some(b"zip".to_vec()));
    }

    #[test]
    fn ram_save_is_not_namespaced() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        saves
            .write(&mario(), CORE, SaveCategory::BatteryRam, b"ram")
            .unwrap();
        assert!(dir.path().join("saves/mario.srm").is_file());
        assert!(!dir.path().join("saves/fceumm").exists());
        assert_eq!(
            saves.read(&mario(), "other-core", SaveCategory::BatteryRam).unwrap(),
            Some(b"ram".to_vec())
        );
    }

    #[test]
    fn missing_ram_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store(dir.path()).read_ram(&mario()).unwrap(), None);
    }

    #[test]
    fn legacy_state_read_until_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        put_legacy(dir.path(), "mario.nes.slot2", b"legacy");

        assert_eq!(
            saves.slot_save(&mario(), CORE, 1).unwrap(),
            Some(b"legacy".to_vec())
        );
        assert!(
            saves
                .resolve_state_location(&mario(), CORE, SaveCategory::SlotState(1))
                .unwrap()
                .is_legacy()
        );

        saves.set_slot_save(&mario(), CORE, 1, b"fresh").unwrap();

        assert_eq!(
            saves.slot_save(&mario(), CORE, 1).unwrap(),
            Some(b"fresh".to_vec())
        );
        let legacy = dir.path().join("states-legacy/mario.nes.slot2");
        assert_eq!(std::fs::read(legacy).unwrap(), b"legacy");
        assert_eq!(
            saves
                .resolve_state_location(&mario(), CORE, SaveCategory::SlotState(1))
                .unwrap(),
            StateLocation::Namespaced(dir.path().join("states/fceumm/mario.nes.slot2"))
        );
    }

    #[test]
    fn legacy_auto_state_is_read() {
        let dir = tempfile::tempdir().unwrap();
        put_legacy(dir.path(), "mario.nes.state", b"auto");
        let saves = store(dir.path());
        assert_eq!(saves.auto_save(&mario(), CORE).unwrap(), Some(b"auto".to_vec()));
    }

    #[test]
    fn states_are_separated_by_core() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        saves.set_auto_save(&mario(), "fceumm", b"a").unwrap();
        saves.set_auto_save(&mario(), "nestopia", b"b").unwrap();
        assert_eq!(saves.auto_save(&mario(), "fceumm").unwrap(), Some(b"a".to_vec()));
        assert_eq!(saves.auto_save(&mario(), "nestopia").unwrap(), Some(b"b".to_vec()));
    }

    #[test]
    fn slot_info_lists_four_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        saves.set_slot_save(&mario(), CORE, 0, b"zero").unwrap();
        put_legacy(dir.path(), "mario.nes.slot3", b"two");

        let infos = saves.list_slot_info(&mario(), CORE).unwrap();
        assert_eq!(infos.len(), MAX_STATES);
        assert!(infos[0].exists && infos[0].last_modified > 0);
        assert!(!infos[1].exists);
        assert_eq!(infos[1].last_modified, 0);
        assert!(infos[2].exists);
        assert!(!infos[3].exists);
    }

    #[test]
    fn out_of_range_slot_fails_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());

        let err = saves.slot_save(&mario(), CORE, 4).unwrap_err();
        assert!(matches!(err, SaveError::InvalidSlot { index: 4 }));

        let err = saves
            .write_state(&mario(), CORE, SaveCategory::SlotState(7), b"x")
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!dir.path().join("states").exists());
    }

    #[test]
    fn battery_ram_rejected_by_state_calls() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        let err = saves
            .write_state(&mario(), CORE, SaveCategory::BatteryRam, b"x")
            .unwrap_err();
        assert!(matches!(err, SaveError::NotAState));
    }

    #[test]
    fn write_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the states root should be makes mkdir fail.
        std::fs::write(dir.path().join("states"), b"").unwrap();
        let err = store(dir.path())
            .set_auto_save(&mario(), CORE, b"x")
            .unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }

    #[test]
    fn state_read_errors_are_not_absent() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        std::fs::create_dir_all(dir.path().join("states/fceumm/mario.nes.state")).unwrap();
        std::fs::create_dir_all(dir.path().join("states/fceumm/mario.nes.slot1")).unwrap();

        let err = saves.auto_save(&mario(), CORE).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));

        let err = saves.list_slot_info(&mario(), CORE).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }

    #[test]
    fn ram_read_error_is_not_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("saves/mario.srm")).unwrap();
        let err = store(dir.path()).read_ram(&mario()).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }

    #[test]
    fn legacy_states_surfaces_broken_states_root() {
        let dir = tempfile::tempdir().unwrap();
        put_legacy(dir.path(), "mario.nes.state", b"a");
        std::fs::write(dir.path().join("states"), b"").unwrap();

        let err = store(dir.path()).legacy_states(&mario(), CORE).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }

    #[test]
    fn legacy_states_lists_only_shadowing_files() {
        let dir = tempfile::tempdir().unwrap();
        let saves = store(dir.path());
        put_legacy(dir.path(), "mario.nes.state", b"a");
        put_legacy(dir.path(), "mario.nes.slot1", b"b");
        put_legacy(dir.path(), "zelda.nes.slot1", b"c");
        saves.set_slot_save(&mario(), CORE, 0, b"new").unwrap();

        let pending = saves.legacy_states(&mario(), CORE).unwrap();
        assert_eq!(pending, vec![dir.path().join("states-legacy/mario.nes.state")]);
    }

    #[test]
    fn in_place_writes_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StoreConfig {
            saves_dir: Some(dir.path().join("sd/saves")),
            states_dir: Some(dir.path().join("sd/states")),
            deprecated_states_dir: Some(dir.path().join("old")),
            atomic_writes: false,
        };
        let saves = SaveStore::from_config(&cfg);
        saves.write_ram(&mario(), b"ram").unwrap();
        saves.set_auto_save(&mario(), CORE, b"state").unwrap();
        assert!(dir.path().join("sd/saves/mario.srm").is_file());
        assert!(dir.path().join("sd/states/fceumm/mario.nes.state").is_file());
    }
}
