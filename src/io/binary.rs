//! Flat binary instance files.
//!
//! Both formats open with a little-endian 4-byte count. An items file
//! then carries `count` 8-byte float values followed by `count` 8-byte
//! float weights; a cities file carries `count` interleaved 4-byte x/y
//! integer pairs. The layouts are preserved as given by the original
//! tooling and are not versioned.

use crate::models::{City, CityList, Item, ItemSet, MAX_CITIES, MAX_ITEMS};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn read_i32(reader: &mut impl Read) -> std::io::Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

fn read_f64(reader: &mut impl Read) -> std::io::Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

fn read_count(reader: &mut impl Read, max: usize, what: &str) -> Result<usize> {
    let count = read_i32(reader).context("failed to read the leading count")?;
    if count <= 0 || count as usize > max {
        bail!("declared {what} count {count} is out of range 1..={max}");
    }
    Ok(count as usize)
}

/// Loads a knapsack instance from a binary file.
///
/// Fails if the file cannot be read, the declared count is outside
/// `1..=`[`MAX_ITEMS`], the file is truncated, or any value/weight is
/// negative or non-finite.
pub fn load_itemset(path: impl AsRef<Path>) -> Result<ItemSet> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("cannot open file {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let count = read_count(&mut reader, MAX_ITEMS, "item")?;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        values.push(read_f64(&mut reader).with_context(|| format!("failed to read value {i}"))?);
    }
    let mut items = Vec::with_capacity(count);
    for (i, value) in values.into_iter().enumerate() {
        let weight =
            read_f64(&mut reader).with_context(|| format!("failed to read weight {i}"))?;
        items.push(Item::new(value, weight));
    }

    ItemSet::new(items)
        .with_context(|| format!("{}: item data violates instance invariants", path.display()))
}

/// Saves a knapsack instance to a binary file in the fixed layout.
pub fn save_itemset(path: impl AsRef<Path>, items: &ItemSet) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("cannot create file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(items.len() as i32).to_le_bytes())?;
    for item in items.iter() {
        writer.write_all(&item.value().to_le_bytes())?;
    }
    for item in items.iter() {
        writer.write_all(&item.weight().to_le_bytes())?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Loads a TSP instance from a binary file.
///
/// Fails if the file cannot be read, the declared count is outside
/// `1..=`[`MAX_CITIES`], or the file is truncated.
pub fn load_cities(path: impl AsRef<Path>) -> Result<CityList> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("cannot open file {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let count = read_count(&mut reader, MAX_CITIES, "city")?;
    let mut cities = Vec::with_capacity(count);
    for i in 0..count {
        let x = read_i32(&mut reader).with_context(|| format!("failed to read city {i} x"))?;
        let y = read_i32(&mut reader).with_context(|| format!("failed to read city {i} y"))?;
        cities.push(City::new(x, y));
    }

    CityList::new(cities).context("city count exceeds the instance limit")
}

/// Saves a TSP instance to a binary file in the fixed layout.
pub fn save_cities(path: impl AsRef<Path>, cities: &CityList) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("cannot create file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(cities.len() as i32).to_le_bytes())?;
    for city in cities.iter() {
        writer.write_all(&city.x().to_le_bytes())?;
        writer.write_all(&city.y().to_le_bytes())?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))
}
