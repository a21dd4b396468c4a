//! Benchmarks for content rendering.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use folio_renderer::render;

const SAMPLE: &str = "\
## The cost no one talks about

Compound components create implicit contracts. The child components depend
on context provided by the parent, but that dependency is invisible at the
call site.

## When I use it

I reach for compound components when all of these are true:

- The component has a genuine parent-child relationship
- The children need shared state that would be awkward to pass via props
- The API is public-facing and ergonomics matter more than simplicity

```typescript
const UserSchema = z.object({
  id: z.string().uuid(),
  email: z.string().email(),
});
```

Use `useRef` for bookkeeping and **useState** for rendered values.
";

fn bench_render_single(c: &mut Criterion) {
    c.bench_function("render_post", |b| b.iter(|| render(black_box(SAMPLE))));
}

fn bench_render_batch(c: &mut Criterion) {
    let docs: Vec<String> = (0..50).map(|i| format!("## Post {i}\n\n{SAMPLE}")).collect();
    c.bench_function("render_batch_50", |b| {
        b.iter(|| {
            docs.iter()
                .map(|doc| render(black_box(doc)))
                .collect::<Vec<_>>()
        });
    });
}

criterion_group!(benches, bench_render_single, bench_render_batch);
criterion_main!(benches);
