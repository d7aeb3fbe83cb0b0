use dna_protein_rs::{hamming_distance, translate_dna};

fn main() {
    let dna_sequence = "ATCTGGCCATAATTCGTTGGCTGAAAGGAGTGCGCCTCCGATAG";
    match translate_dna(dna_sequence) {
        Ok(protein) => println!("Protein sequence: {}", protein),
        Err(e) => println!("Error: {}", e),
    }

    let distance = hamming_distance("Ayşenur Akcan", "aysenura");
    println!("Hamming distance: {}", distance);
}
