use fuzz_sprig::mst::{build, run_differential, RawEdge};

fn main() {
    afl::fuzz!(|data: (u8, usize, Vec<RawEdge>)| {
        let (vertices, start, edges) = data;
        let vertices = usize::from(vertices);

        if vertices == 0 {
            return;
        }

        run_differential(&build(vertices, &edges), start % vertices);
    });
}
