/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use bit_set::BitSet;
use serde::{Serialize,Deserialize};
use crate::errors::{raster_error, Result};

/// a boolean raster stored as a BitSet (row major, `index = row*width + col`)
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Mask {
    width: usize,
    height: usize,
    data: BitSet
}

impl Mask {
    pub fn new (width: usize, height: usize)->Self {
        let data = BitSet::with_capacity(width*height);
        Mask{width,height,data}
    }

    /// a mask that is set wherever `f(row,col)` is true
    pub fn from_fn<F> (width: usize, height: usize, f: F)->Self where F: Fn(usize,usize)->bool {
        let mut mask = Mask::new( width, height);
        for row in 0..height {
            for col in 0..width {
                if f(row,col) { mask.set( row, col) }
            }
        }
        mask
    }

    pub fn dimensions (&self)->(usize,usize) {
        (self.width,self.height)
    }

    pub fn get (&self, row: usize, col: usize)->bool {
        self.data.contains( row*self.width + col)
    }

    pub fn set (&mut self, row: usize, col: usize) {
        self.data.insert( row*self.width + col);
    }

    /// number of set pixels
    pub fn count (&self)->usize {
        self.data.len()
    }

    pub fn is_empty (&self)->bool {
        self.data.is_empty()
    }

    pub fn intersection (&self, other: &Mask)->Result<Self> {
        if self.dimensions() == other.dimensions() {
            let mut data = self.data.clone();
            data.intersect_with( &other.data);
            Ok( Mask{ width: self.width, height: self.height, data } )
        } else {
            Err( raster_error!("masks have different dimensions"))
        }
    }

    /// (row,col) of all set pixels in row major order
    pub fn iter (&self)->MaskIter<'_> {
        MaskIter{ inner: self.data.iter(), w: self.width }
    }

    pub fn print (&self) {
        let (w,h) = self.dimensions();

        print!("    ┌");
        for _ in 0..w { print!( "──"); }
        println!("─┐");

        for row in 0..h {
            print!( "{:3} │", row);
            for col in 0..w {
                if self.get(row, col) { print!( " ◼︎"); } else { print!("  "); }
            }
            println!(" │");
        }

        print!("    └");
        for _ in 0..w { print!( "──"); }
        println!("─┘");
    }
}

pub struct MaskIter<'a> {
    inner: bit_set::Iter<'a, u32>,
    w: usize,
}

impl<'a> Iterator for MaskIter<'a> {
    type Item = (usize,usize);

    fn next (&mut self)->Option<Self::Item> {
        self.inner.next().map( |i| (i / self.w, i % self.w))
    }
}
