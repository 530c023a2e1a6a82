use sandbx_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64, 1).expect("valid canvas");
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.add_particle(x, y, ((x + y) % 3) as u8);
        }
    }
    assert_eq!(world.particle_count(), 128 * 32);

    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.particles_processed() > 0);
    assert!(stats.particles_processed() <= 128 * 32);
    assert_eq!(world.particle_count(), 128 * 32);
    assert_eq!(world.colors_len(), 128 * 64);
}
