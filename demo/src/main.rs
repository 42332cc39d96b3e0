use vara::{CapacityError, DynVec, dyn_vec};

fn print_values(vec: &DynVec<i32>) {
    for i in 0..vec.len() {
        print!("{} ", vec[i]);
    }
    println!();
}

fn main() -> Result<(), CapacityError> {
    let vec_fill = dyn_vec![3; 7]?;
    print_values(&vec_fill);

    let mut vec = dyn_vec![1, 2, 3, 4, 5, 6, 7]?;
    print_values(&vec);

    let vec_copy = vec.clone();
    print_values(&vec_copy);

    vec.pop();
    print_values(&vec);

    let mut vec1 = vec.take();
    print_values(&vec1);

    let mut vec2 = dyn_vec![1, 2, 3, 4]?;
    vec1 = vec2.take();
    print_values(&vec1);

    println!("Resize");
    let mut vec_resize = dyn_vec![1, 2, 3, 4, 5, 6, 7]?;
    vec_resize.resize_with(3, i32::default)?;
    print_values(&vec_resize);
    vec_resize.resize(6, 3)?;
    print_values(&vec_resize);
    vec_resize.resize(12, 3)?;
    print_values(&vec_resize);
    Ok(())
}
