//! Static space-group catalogue.
//!
//! One row per reference setting: sequential number, legacy CCP4 code
//! (0 when none exists), Hermann-Mauguin symbol, setting qualifier and
//! Hall symbol. Settings of the same number are grouped together with the
//! default setting first. Alternate settings expressed in a permuted or
//! shifted basis carry the change of basis inside the Hall symbol.

use crate::model::spacegroup::SpaceGroup;

macro_rules! sg {
    ($number:expr, $ccp4:expr, $hm:expr, $ext:expr, $hall:expr) => {
        SpaceGroup {
            number: $number,
            ccp4: $ccp4,
            hm: $hm,
            ext: $ext,
            hall: $hall,
        }
    };
}

pub(crate) static TABLE: &[SpaceGroup] = &[
    // Triclinic
    sg!(1, 1, "P 1", "", "P 1"),
    sg!(2, 2, "P -1", "", "-P 1"),
    // Monoclinic
    sg!(3, 3, "P 1 2 1", "", "P 2y"),
    sg!(3, 1003, "P 1 1 2", "", "P 2"),
    sg!(3, 0, "P 2 1 1", "", "P 2x"),
    sg!(4, 4, "P 1 21 1", "", "P 2yb"),
    sg!(4, 1004, "P 1 1 21", "", "P 2c"),
    sg!(4, 0, "P 21 1 1", "", "P 2xa"),
    sg!(5, 5, "C 1 2 1", "", "C 2y"),
    sg!(5, 2005, "A 1 2 1", "", "A 2y"),
    sg!(5, 4005, "I 1 2 1", "", "I 2y"),
    sg!(5, 0, "A 1 1 2", "", "A 2"),
    sg!(5, 0, "B 1 1 2", "", "B 2"),
    sg!(5, 0, "I 1 1 2", "", "I 2"),
    sg!(5, 0, "B 2 1 1", "", "B 2x"),
    sg!(5, 0, "C 2 1 1", "", "C 2x"),
    sg!(5, 0, "I 2 1 1", "", "I 2x"),
    sg!(5, 0, "I 1 21 1", "", "I 2yb"),
    sg!(6, 6, "P 1 m 1", "", "P -2y"),
    sg!(6, 0, "P 1 1 m", "", "P -2"),
    sg!(6, 0, "P m 1 1", "", "P -2x"),
    sg!(7, 7, "P 1 c 1", "", "P -2yc"),
    sg!(7, 0, "P 1 n 1", "", "P -2yac"),
    sg!(7, 0, "P 1 a 1", "", "P -2ya"),
    sg!(7, 0, "P 1 1 a", "", "P -2a"),
    sg!(7, 0, "P 1 1 n", "", "P -2ab"),
    sg!(7, 0, "P 1 1 b", "", "P -2b"),
    sg!(7, 0, "P b 1 1", "", "P -2xb"),
    sg!(7, 0, "P n 1 1", "", "P -2xbc"),
    sg!(7, 0, "P c 1 1", "", "P -2xc"),
    sg!(8, 8, "C 1 m 1", "", "C -2y"),
    sg!(8, 0, "A 1 m 1", "", "A -2y"),
    sg!(8, 0, "I 1 m 1", "", "I -2y"),
    sg!(8, 0, "A 1 1 m", "", "A -2"),
    sg!(8, 0, "B 1 1 m", "", "B -2"),
    sg!(8, 0, "I 1 1 m", "", "I -2"),
    sg!(8, 0, "B m 1 1", "", "B -2x"),
    sg!(8, 0, "C m 1 1", "", "C -2x"),
    sg!(8, 0, "I m 1 1", "", "I -2x"),
    sg!(9, 9, "C 1 c 1", "", "C -2yc"),
    sg!(9, 0, "A 1 n 1", "", "A -2yac"),
    sg!(9, 0, "I 1 a 1", "", "I -2ya"),
    sg!(9, 0, "A 1 a 1", "", "A -2ya"),
    sg!(9, 0, "C 1 n 1", "", "C -2yac"),
    sg!(9, 0, "I 1 c 1", "", "I -2yc"),
    sg!(9, 0, "A 1 1 a", "", "A -2a"),
    sg!(9, 0, "B 1 1 n", "", "B -2ab"),
    sg!(9, 0, "I 1 1 b", "", "I -2b"),
    sg!(9, 0, "B 1 1 b", "", "B -2b"),
    sg!(9, 0, "A 1 1 n", "", "A -2ab"),
    sg!(9, 0, "I 1 1 a", "", "I -2a"),
    sg!(9, 0, "B b 1 1", "", "B -2xb"),
    sg!(9, 0, "C n 1 1", "", "C -2xbc"),
    sg!(9, 0, "I c 1 1", "", "I -2xc"),
    sg!(9, 0, "C c 1 1", "", "C -2xc"),
    sg!(9, 0, "B n 1 1", "", "B -2xbc"),
    sg!(9, 0, "I b 1 1", "", "I -2xb"),
    sg!(10, 10, "P 1 2/m 1", "", "-P 2y"),
    sg!(10, 0, "P 1 1 2/m", "", "-P 2"),
    sg!(10, 0, "P 2/m 1 1", "", "-P 2x"),
    sg!(11, 11, "P 1 21/m 1", "", "-P 2yb"),
    sg!(11, 0, "P 1 1 21/m", "", "-P 2c"),
    sg!(11, 0, "P 21/m 1 1", "", "-P 2xa"),
    sg!(12, 12, "C 1 2/m 1", "", "-C 2y"),
    sg!(12, 0, "A 1 2/m 1", "", "-A 2y"),
    sg!(12, 0, "I 1 2/m 1", "", "-I 2y"),
    sg!(12, 0, "A 1 1 2/m", "", "-A 2"),
    sg!(12, 0, "B 1 1 2/m", "", "-B 2"),
    sg!(12, 0, "I 1 1 2/m", "", "-I 2"),
    sg!(12, 0, "B 2/m 1 1", "", "-B 2x"),
    sg!(12, 0, "C 2/m 1 1", "", "-C 2x"),
    sg!(12, 0, "I 2/m 1 1", "", "-I 2x"),
    sg!(13, 13, "P 1 2/c 1", "", "-P 2yc"),
    sg!(13, 0, "P 1 2/n 1", "", "-P 2yac"),
    sg!(13, 0, "P 1 2/a 1", "", "-P 2ya"),
    sg!(13, 0, "P 1 1 2/a", "", "-P 2a"),
    sg!(13, 0, "P 1 1 2/n", "", "-P 2ab"),
    sg!(13, 0, "P 1 1 2/b", "", "-P 2b"),
    sg!(13, 0, "P 2/b 1 1", "", "-P 2xb"),
    sg!(13, 0, "P 2/n 1 1", "", "-P 2xbc"),
    sg!(13, 0, "P 2/c 1 1", "", "-P 2xc"),
    sg!(14, 14, "P 1 21/c 1", "", "-P 2ybc"),
    sg!(14, 0, "P 1 21/n 1", "", "-P 2yn"),
    sg!(14, 0, "P 1 21/a 1", "", "-P 2yab"),
    sg!(14, 0, "P 1 1 21/a", "", "-P 2ac"),
    sg!(14, 0, "P 1 1 21/n", "", "-P 2n"),
    sg!(14, 0, "P 1 1 21/b", "", "-P 2bc"),
    sg!(14, 0, "P 21/b 1 1", "", "-P 2xab"),
    sg!(14, 0, "P 21/n 1 1", "", "-P 2xn"),
    sg!(14, 0, "P 21/c 1 1", "", "-P 2xac"),
    sg!(15, 15, "C 1 2/c 1", "", "-C 2yc"),
    sg!(15, 0, "A 1 2/n 1", "", "-A 2yac"),
    sg!(15, 0, "I 1 2/a 1", "", "-I 2ya"),
    sg!(15, 0, "A 1 2/a 1", "", "-A 2ya"),
    sg!(15, 0, "C 1 2/n 1", "", "-C 2yac"),
    sg!(15, 0, "I 1 2/c 1", "", "-I 2yc"),
    sg!(15, 0, "A 1 1 2/a", "", "-A 2a"),
    sg!(15, 0, "B 1 1 2/n", "", "-B 2ab"),
    sg!(15, 0, "I 1 1 2/b", "", "-I 2b"),
    sg!(15, 0, "B 1 1 2/b", "", "-B 2b"),
    sg!(15, 0, "A 1 1 2/n", "", "-A 2ab"),
    sg!(15, 0, "I 1 1 2/a", "", "-I 2a"),
    sg!(15, 0, "B 2/b 1 1", "", "-B 2xb"),
    sg!(15, 0, "C 2/n 1 1", "", "-C 2xbc"),
    sg!(15, 0, "I 2/c 1 1", "", "-I 2xc"),
    sg!(15, 0, "C 2/c 1 1", "", "-C 2xc"),
    sg!(15, 0, "B 2/n 1 1", "", "-B 2xbc"),
    sg!(15, 0, "I 2/b 1 1", "", "-I 2xb"),
    // Orthorhombic
    sg!(16, 16, "P 2 2 2", "", "P 2 2"),
    sg!(17, 17, "P 2 2 21", "", "P 2c 2"),
    sg!(17, 0, "P 21 2 2", "", "P 2c 2 (z,x,y)"),
    sg!(17, 0, "P 2 21 2", "", "P 2c 2 (y,z,x)"),
    sg!(18, 18, "P 21 21 2", "", "P 2 2ab"),
    sg!(18, 0, "P 2 21 21", "", "P 2 2ab (z,x,y)"),
    sg!(18, 0, "P 21 2 21", "", "P 2 2ab (y,z,x)"),
    sg!(19, 19, "P 21 21 21", "", "P 2ac 2ab"),
    sg!(20, 20, "C 2 2 21", "", "C 2c 2"),
    sg!(20, 0, "A 21 2 2", "", "C 2c 2 (z,x,y)"),
    sg!(20, 0, "B 2 21 2", "", "C 2c 2 (y,z,x)"),
    sg!(21, 21, "C 2 2 2", "", "C 2 2"),
    sg!(21, 0, "A 2 2 2", "", "C 2 2 (z,x,y)"),
    sg!(21, 0, "B 2 2 2", "", "C 2 2 (y,z,x)"),
    sg!(22, 22, "F 2 2 2", "", "F 2 2"),
    sg!(23, 23, "I 2 2 2", "", "I 2 2"),
    sg!(24, 24, "I 21 21 21", "", "I 2b 2c"),
    sg!(25, 25, "P m m 2", "", "P 2 -2"),
    sg!(25, 0, "P 2 m m", "", "P 2 -2 (z,x,y)"),
    sg!(25, 0, "P m 2 m", "", "P 2 -2 (y,z,x)"),
    sg!(26, 26, "P m c 21", "", "P 2c -2"),
    sg!(26, 0, "P c m 21", "", "P 2c -2 (y,x,-z)"),
    sg!(26, 0, "P 21 m a", "", "P 2c -2 (z,x,y)"),
    sg!(26, 0, "P 21 a m", "", "P 2c -2 (-z,y,x)"),
    sg!(26, 0, "P b 21 m", "", "P 2c -2 (y,z,x)"),
    sg!(26, 0, "P m 21 b", "", "P 2c -2 (x,-z,y)"),
    sg!(27, 27, "P c c 2", "", "P 2 -2c"),
    sg!(27, 0, "P 2 a a", "", "P 2 -2c (z,x,y)"),
    sg!(27, 0, "P b 2 b", "", "P 2 -2c (y,z,x)"),
    sg!(28, 28, "P m a 2", "", "P 2 -2a"),
    sg!(28, 0, "P b m 2", "", "P 2 -2a (y,x,-z)"),
    sg!(28, 0, "P 2 m b", "", "P 2 -2a (z,x,y)"),
    sg!(28, 0, "P 2 c m", "", "P 2 -2a (-z,y,x)"),
    sg!(28, 0, "P c 2 m", "", "P 2 -2a (y,z,x)"),
    sg!(28, 0, "P m 2 a", "", "P 2 -2a (x,-z,y)"),
    sg!(29, 29, "P c a 21", "", "P 2c -2ac"),
    sg!(29, 0, "P b c 21", "", "P 2c -2ac (y,x,-z)"),
    sg!(29, 0, "P 21 a b", "", "P 2c -2ac (z,x,y)"),
    sg!(29, 0, "P 21 c a", "", "P 2c -2ac (-z,y,x)"),
    sg!(29, 0, "P c 21 b", "", "P 2c -2ac (y,z,x)"),
    sg!(29, 0, "P b 21 a", "", "P 2c -2ac (x,-z,y)"),
    sg!(30, 30, "P n c 2", "", "P 2 -2bc"),
    sg!(30, 0, "P c n 2", "", "P 2 -2bc (y,x,-z)"),
    sg!(30, 0, "P 2 n a", "", "P 2 -2bc (z,x,y)"),
    sg!(30, 0, "P 2 a n", "", "P 2 -2bc (-z,y,x)"),
    sg!(30, 0, "P b 2 n", "", "P 2 -2bc (y,z,x)"),
    sg!(30, 0, "P n 2 b", "", "P 2 -2bc (x,-z,y)"),
    sg!(31, 31, "P m n 21", "", "P 2ac -2"),
    sg!(31, 0, "P n m 21", "", "P 2ac -2 (y,x,-z)"),
    sg!(31, 0, "P 21 m n", "", "P 2ac -2 (z,x,y)"),
    sg!(31, 0, "P 21 n m", "", "P 2ac -2 (-z,y,x)"),
    sg!(31, 0, "P n 21 m", "", "P 2ac -2 (y,z,x)"),
    sg!(31, 0, "P m 21 n", "", "P 2ac -2 (x,-z,y)"),
    sg!(32, 32, "P b a 2", "", "P 2 -2ab"),
    sg!(32, 0, "P 2 c b", "", "P 2 -2ab (z,x,y)"),
    sg!(32, 0, "P c 2 a", "", "P 2 -2ab (y,z,x)"),
    sg!(33, 33, "P n a 21", "", "P 2c -2n"),
    sg!(33, 0, "P b n 21", "", "P 2c -2n (y,x,-z)"),
    sg!(33, 0, "P 21 n b", "", "P 2c -2n (z,x,y)"),
    sg!(33, 0, "P 21 c n", "", "P 2c -2n (-z,y,x)"),
    sg!(33, 0, "P c 21 n", "", "P 2c -2n (y,z,x)"),
    sg!(33, 0, "P n 21 a", "", "P 2c -2n (x,-z,y)"),
    sg!(34, 34, "P n n 2", "", "P 2 -2n"),
    sg!(34, 0, "P 2 n n", "", "P 2 -2n (z,x,y)"),
    sg!(34, 0, "P n 2 n", "", "P 2 -2n (y,z,x)"),
    sg!(35, 35, "C m m 2", "", "C 2 -2"),
    sg!(35, 0, "A 2 m m", "", "C 2 -2 (z,x,y)"),
    sg!(35, 0, "B m 2 m", "", "C 2 -2 (y,z,x)"),
    sg!(36, 36, "C m c 21", "", "C 2c -2"),
    sg!(36, 0, "C c m 21", "", "C 2c -2 (y,x,-z)"),
    sg!(36, 0, "A 21 m a", "", "C 2c -2 (z,x,y)"),
    sg!(36, 0, "A 21 a m", "", "C 2c -2 (-z,y,x)"),
    sg!(36, 0, "B b 21 m", "", "C 2c -2 (y,z,x)"),
    sg!(36, 0, "B m 21 b", "", "C 2c -2 (x,-z,y)"),
    sg!(37, 37, "C c c 2", "", "C 2 -2c"),
    sg!(37, 0, "A 2 a a", "", "C 2 -2c (z,x,y)"),
    sg!(37, 0, "B b 2 b", "", "C 2 -2c (y,z,x)"),
    sg!(38, 38, "A m m 2", "", "A 2 -2"),
    sg!(38, 0, "B m m 2", "", "A 2 -2 (y,x,-z)"),
    sg!(38, 0, "B 2 m m", "", "A 2 -2 (z,x,y)"),
    sg!(38, 0, "C 2 m m", "", "A 2 -2 (-z,y,x)"),
    sg!(38, 0, "C m 2 m", "", "A 2 -2 (y,z,x)"),
    sg!(38, 0, "A m 2 m", "", "A 2 -2 (x,-z,y)"),
    sg!(39, 39, "A b m 2", "", "A 2 -2b"),
    sg!(39, 0, "B m a 2", "", "A 2 -2b (y,x,-z)"),
    sg!(39, 0, "B 2 c m", "", "A 2 -2b (z,x,y)"),
    sg!(39, 0, "C 2 m b", "", "A 2 -2b (-z,y,x)"),
    sg!(39, 0, "C m 2 a", "", "A 2 -2b (y,z,x)"),
    sg!(39, 0, "A c 2 m", "", "A 2 -2b (x,-z,y)"),
    sg!(40, 40, "A m a 2", "", "A 2 -2a"),
    sg!(40, 0, "B b m 2", "", "A 2 -2a (y,x,-z)"),
    sg!(40, 0, "B 2 m b", "", "A 2 -2a (z,x,y)"),
    sg!(40, 0, "C 2 c m", "", "A 2 -2a (-z,y,x)"),
    sg!(40, 0, "C c 2 m", "", "A 2 -2a (y,z,x)"),
    sg!(40, 0, "A m 2 a", "", "A 2 -2a (x,-z,y)"),
    sg!(41, 41, "A b a 2", "", "A 2 -2ab"),
    sg!(41, 0, "B b a 2", "", "A 2 -2ab (y,x,-z)"),
    sg!(41, 0, "B 2 c b", "", "A 2 -2ab (z,x,y)"),
    sg!(41, 0, "C 2 c b", "", "A 2 -2ab (-z,y,x)"),
    sg!(41, 0, "C c 2 a", "", "A 2 -2ab (y,z,x)"),
    sg!(41, 0, "A c 2 a", "", "A 2 -2ab (x,-z,y)"),
    sg!(42, 42, "F m m 2", "", "F 2 -2"),
    sg!(42, 0, "F 2 m m", "", "F 2 -2 (z,x,y)"),
    sg!(42, 0, "F m 2 m", "", "F 2 -2 (y,z,x)"),
    sg!(43, 43, "F d d 2", "", "F 2 -2d"),
    sg!(43, 0, "F 2 d d", "", "F 2 -2d (z,x,y)"),
    sg!(43, 0, "F d 2 d", "", "F 2 -2d (y,z,x)"),
    sg!(44, 44, "I m m 2", "", "I 2 -2"),
    sg!(44, 0, "I 2 m m", "", "I 2 -2 (z,x,y)"),
    sg!(44, 0, "I m 2 m", "", "I 2 -2 (y,z,x)"),
    sg!(45, 45, "I b a 2", "", "I 2 -2c"),
    sg!(45, 0, "I 2 c b", "", "I 2 -2c (z,x,y)"),
    sg!(45, 0, "I c 2 a", "", "I 2 -2c (y,z,x)"),
    sg!(46, 46, "I m a 2", "", "I 2 -2a"),
    sg!(46, 0, "I b m 2", "", "I 2 -2a (y,x,-z)"),
    sg!(46, 0, "I 2 m b", "", "I 2 -2a (z,x,y)"),
    sg!(46, 0, "I 2 c m", "", "I 2 -2a (-z,y,x)"),
    sg!(46, 0, "I c 2 m", "", "I 2 -2a (y,z,x)"),
    sg!(46, 0, "I m 2 a", "", "I 2 -2a (x,-z,y)"),
    sg!(47, 47, "P m m m", "", "-P 2 2"),
    sg!(48, 48, "P n n n", "1", "P 2 2 -1n"),
    sg!(48, 0, "P n n n", "2", "-P 2ab 2bc"),
    sg!(49, 49, "P c c m", "", "-P 2 2c"),
    sg!(49, 0, "P m a a", "", "-P 2 2c (z,x,y)"),
    sg!(49, 0, "P b m b", "", "-P 2 2c (y,z,x)"),
    sg!(50, 50, "P b a n", "1", "P 2 2 -1ab"),
    sg!(50, 0, "P b a n", "2", "-P 2ab 2b"),
    sg!(50, 0, "P n c b", "1", "P 2 2 -1ab (z,x,y)"),
    sg!(50, 0, "P n c b", "2", "-P 2ab 2b (z,x,y)"),
    sg!(50, 0, "P c n a", "1", "P 2 2 -1ab (y,z,x)"),
    sg!(50, 0, "P c n a", "2", "-P 2ab 2b (y,z,x)"),
    sg!(51, 51, "P m m a", "", "-P 2a 2a"),
    sg!(51, 0, "P m m b", "", "-P 2a 2a (y,x,-z)"),
    sg!(51, 0, "P b m m", "", "-P 2a 2a (z,x,y)"),
    sg!(51, 0, "P c m m", "", "-P 2a 2a (-z,y,x)"),
    sg!(51, 0, "P m c m", "", "-P 2a 2a (y,z,x)"),
    sg!(51, 0, "P m a m", "", "-P 2a 2a (x,-z,y)"),
    sg!(52, 52, "P n n a", "", "-P 2a 2bc"),
    sg!(52, 0, "P n n b", "", "-P 2a 2bc (y,x,-z)"),
    sg!(52, 0, "P b n n", "", "-P 2a 2bc (z,x,y)"),
    sg!(52, 0, "P c n n", "", "-P 2a 2bc (-z,y,x)"),
    sg!(52, 0, "P n c n", "", "-P 2a 2bc (y,z,x)"),
    sg!(52, 0, "P n a n", "", "-P 2a 2bc (x,-z,y)"),
    sg!(53, 53, "P m n a", "", "-P 2ac 2"),
    sg!(53, 0, "P n m b", "", "-P 2ac 2 (y,x,-z)"),
    sg!(53, 0, "P b m n", "", "-P 2ac 2 (z,x,y)"),
    sg!(53, 0, "P c n m", "", "-P 2ac 2 (-z,y,x)"),
    sg!(53, 0, "P n c m", "", "-P 2ac 2 (y,z,x)"),
    sg!(53, 0, "P m a n", "", "-P 2ac 2 (x,-z,y)"),
    sg!(54, 54, "P c c a", "", "-P 2a 2ac"),
    sg!(54, 0, "P c c b", "", "-P 2a 2ac (y,x,-z)"),
    sg!(54, 0, "P b a a", "", "-P 2a 2ac (z,x,y)"),
    sg!(54, 0, "P c a a", "", "-P 2a 2ac (-z,y,x)"),
    sg!(54, 0, "P b c b", "", "-P 2a 2ac (y,z,x)"),
    sg!(54, 0, "P b a b", "", "-P 2a 2ac (x,-z,y)"),
    sg!(55, 55, "P b a m", "", "-P 2 2ab"),
    sg!(55, 0, "P m c b", "", "-P 2 2ab (z,x,y)"),
    sg!(55, 0, "P c m a", "", "-P 2 2ab (y,z,x)"),
    sg!(56, 56, "P c c n", "", "-P 2ab 2ac"),
    sg!(56, 0, "P n a a", "", "-P 2ab 2ac (z,x,y)"),
    sg!(56, 0, "P b n b", "", "-P 2ab 2ac (y,z,x)"),
    sg!(57, 57, "P b c m", "", "-P 2c 2b"),
    sg!(57, 0, "P c a m", "", "-P 2c 2b (y,x,-z)"),
    sg!(57, 0, "P m c a", "", "-P 2c 2b (z,x,y)"),
    sg!(57, 0, "P m a b", "", "-P 2c 2b (-z,y,x)"),
    sg!(57, 0, "P b m a", "", "-P 2c 2b (y,z,x)"),
    sg!(57, 0, "P c m b", "", "-P 2c 2b (x,-z,y)"),
    sg!(58, 58, "P n n m", "", "-P 2 2n"),
    sg!(58, 0, "P m n n", "", "-P 2 2n (z,x,y)"),
    sg!(58, 0, "P n m n", "", "-P 2 2n (y,z,x)"),
    sg!(59, 59, "P m m n", "1", "P 2 2ab -1ab"),
    sg!(59, 0, "P m m n", "2", "-P 2ab 2a"),
    sg!(59, 0, "P n m m", "1", "P 2 2ab -1ab (z,x,y)"),
    sg!(59, 0, "P n m m", "2", "-P 2ab 2a (z,x,y)"),
    sg!(59, 0, "P m n m", "1", "P 2 2ab -1ab (y,z,x)"),
    sg!(59, 0, "P m n m", "2", "-P 2ab 2a (y,z,x)"),
    sg!(60, 60, "P b c n", "", "-P 2n 2ab"),
    sg!(60, 0, "P c a n", "", "-P 2n 2ab (y,x,-z)"),
    sg!(60, 0, "P n c a", "", "-P 2n 2ab (z,x,y)"),
    sg!(60, 0, "P n a b", "", "-P 2n 2ab (-z,y,x)"),
    sg!(60, 0, "P b n a", "", "-P 2n 2ab (y,z,x)"),
    sg!(60, 0, "P c n b", "", "-P 2n 2ab (x,-z,y)"),
    sg!(61, 61, "P b c a", "", "-P 2ac 2ab"),
    sg!(61, 0, "P c a b", "", "-P 2ac 2ab (y,x,-z)"),
    sg!(62, 62, "P n m a", "", "-P 2ac 2n"),
    sg!(62, 0, "P m n b", "", "-P 2ac 2n (y,x,-z)"),
    sg!(62, 0, "P b n m", "", "-P 2ac 2n (z,x,y)"),
    sg!(62, 0, "P c m n", "", "-P 2ac 2n (-z,y,x)"),
    sg!(62, 0, "P m c n", "", "-P 2ac 2n (y,z,x)"),
    sg!(62, 0, "P n a m", "", "-P 2ac 2n (x,-z,y)"),
    sg!(63, 63, "C m c m", "", "-C 2c 2"),
    sg!(63, 0, "C c m m", "", "-C 2c 2 (y,x,-z)"),
    sg!(63, 0, "A m m a", "", "-C 2c 2 (z,x,y)"),
    sg!(63, 0, "A m a m", "", "-C 2c 2 (-z,y,x)"),
    sg!(63, 0, "B b m m", "", "-C 2c 2 (y,z,x)"),
    sg!(63, 0, "B m m b", "", "-C 2c 2 (x,-z,y)"),
    sg!(64, 64, "C m c a", "", "-C 2bc 2"),
    sg!(64, 0, "C c m b", "", "-C 2bc 2 (y,x,-z)"),
    sg!(64, 0, "A b m a", "", "-C 2bc 2 (z,x,y)"),
    sg!(64, 0, "A c a m", "", "-C 2bc 2 (-z,y,x)"),
    sg!(64, 0, "B b c m", "", "-C 2bc 2 (y,z,x)"),
    sg!(64, 0, "B m a b", "", "-C 2bc 2 (x,-z,y)"),
    sg!(65, 65, "C m m m", "", "-C 2 2"),
    sg!(65, 0, "A m m m", "", "-C 2 2 (z,x,y)"),
    sg!(65, 0, "B m m m", "", "-C 2 2 (y,z,x)"),
    sg!(66, 66, "C c c m", "", "-C 2 2c"),
    sg!(66, 0, "A m a a", "", "-C 2 2c (z,x,y)"),
    sg!(66, 0, "B b m b", "", "-C 2 2c (y,z,x)"),
    sg!(67, 67, "C m m a", "", "-C 2b 2"),
    sg!(67, 0, "C m m b", "", "-C 2b 2 (y,x,-z)"),
    sg!(67, 0, "A b m m", "", "-C 2b 2 (z,x,y)"),
    sg!(67, 0, "A c m m", "", "-C 2b 2 (-z,y,x)"),
    sg!(67, 0, "B m c m", "", "-C 2b 2 (y,z,x)"),
    sg!(67, 0, "B m a m", "", "-C 2b 2 (x,-z,y)"),
    sg!(68, 68, "C c c a", "1", "C 2 2 -1bc"),
    sg!(68, 0, "C c c a", "2", "-C 2b 2bc"),
    sg!(68, 0, "C c c b", "1", "C 2 2 -1bc (y,x,-z)"),
    sg!(68, 0, "C c c b", "2", "-C 2b 2bc (y,x,-z)"),
    sg!(68, 0, "A b a a", "1", "C 2 2 -1bc (z,x,y)"),
    sg!(68, 0, "A b a a", "2", "-C 2b 2bc (z,x,y)"),
    sg!(68, 0, "A c a a", "1", "C 2 2 -1bc (-z,y,x)"),
    sg!(68, 0, "A c a a", "2", "-C 2b 2bc (-z,y,x)"),
    sg!(68, 0, "B b c b", "1", "C 2 2 -1bc (y,z,x)"),
    sg!(68, 0, "B b c b", "2", "-C 2b 2bc (y,z,x)"),
    sg!(68, 0, "B b a b", "1", "C 2 2 -1bc (x,-z,y)"),
    sg!(68, 0, "B b a b", "2", "-C 2b 2bc (x,-z,y)"),
    sg!(69, 69, "F m m m", "", "-F 2 2"),
    sg!(70, 70, "F d d d", "1", "F 2 2 -1d"),
    sg!(70, 0, "F d d d", "2", "-F 2uv 2vw"),
    sg!(71, 71, "I m m m", "", "-I 2 2"),
    sg!(72, 72, "I b a m", "", "-I 2 2c"),
    sg!(72, 0, "I m c b", "", "-I 2 2c (z,x,y)"),
    sg!(72, 0, "I c m a", "", "-I 2 2c (y,z,x)"),
    sg!(73, 73, "I b c a", "", "-I 2b 2c"),
    sg!(73, 0, "I c a b", "", "-I 2b 2c (y,x,-z)"),
    sg!(74, 74, "I m m a", "", "-I 2b 2"),
    sg!(74, 0, "I m m b", "", "-I 2b 2 (y,x,-z)"),
    sg!(74, 0, "I b m m", "", "-I 2b 2 (z,x,y)"),
    sg!(74, 0, "I c m m", "", "-I 2b 2 (-z,y,x)"),
    sg!(74, 0, "I m c m", "", "-I 2b 2 (y,z,x)"),
    sg!(74, 0, "I m a m", "", "-I 2b 2 (x,-z,y)"),
    // Tetragonal
    sg!(75, 75, "P 4", "", "P 4"),
    sg!(76, 76, "P 41", "", "P 4w"),
    sg!(77, 77, "P 42", "", "P 4c"),
    sg!(78, 78, "P 43", "", "P 4cw"),
    sg!(79, 79, "I 4", "", "I 4"),
    sg!(80, 80, "I 41", "", "I 4bw"),
    sg!(81, 81, "P -4", "", "P -4"),
    sg!(82, 82, "I -4", "", "I -4"),
    sg!(83, 83, "P 4/m", "", "-P 4"),
    sg!(84, 84, "P 42/m", "", "-P 4c"),
    sg!(85, 85, "P 4/n", "1", "P 4ab -1ab"),
    sg!(85, 0, "P 4/n", "2", "-P 4a"),
    sg!(86, 86, "P 42/n", "1", "P 4n -1n"),
    sg!(86, 0, "P 42/n", "2", "-P 4bc"),
    sg!(87, 87, "I 4/m", "", "-I 4"),
    sg!(88, 88, "I 41/a", "1", "I 4bw -1bw"),
    sg!(88, 0, "I 41/a", "2", "-I 4ad"),
    sg!(89, 89, "P 4 2 2", "", "P 4 2"),
    sg!(90, 90, "P 4 21 2", "", "P 4ab 2ab"),
    sg!(91, 91, "P 41 2 2", "", "P 4w 2c"),
    sg!(92, 92, "P 41 21 2", "", "P 4abw 2nw"),
    sg!(93, 93, "P 42 2 2", "", "P 4c 2"),
    sg!(94, 94, "P 42 21 2", "", "P 4n 2n"),
    sg!(95, 95, "P 43 2 2", "", "P 4cw 2c"),
    sg!(96, 96, "P 43 21 2", "", "P 4nw 2abw"),
    sg!(97, 97, "I 4 2 2", "", "I 4 2"),
    sg!(98, 98, "I 41 2 2", "", "I 4bw 2bw"),
    sg!(99, 99, "P 4 m m", "", "P 4 -2"),
    sg!(100, 100, "P 4 b m", "", "P 4 -2ab"),
    sg!(101, 101, "P 42 c m", "", "P 4c -2c"),
    sg!(102, 102, "P 42 n m", "", "P 4n -2n"),
    sg!(103, 103, "P 4 c c", "", "P 4 -2c"),
    sg!(104, 104, "P 4 n c", "", "P 4 -2n"),
    sg!(105, 105, "P 42 m c", "", "P 4c -2"),
    sg!(106, 106, "P 42 b c", "", "P 4c -2ab"),
    sg!(107, 107, "I 4 m m", "", "I 4 -2"),
    sg!(108, 108, "I 4 c m", "", "I 4 -2c"),
    sg!(109, 109, "I 41 m d", "", "I 4bw -2"),
    sg!(110, 110, "I 41 c d", "", "I 4bw -2c"),
    sg!(111, 111, "P -4 2 m", "", "P -4 2"),
    sg!(112, 112, "P -4 2 c", "", "P -4 2c"),
    sg!(113, 113, "P -4 21 m", "", "P -4 2ab"),
    sg!(114, 114, "P -4 21 c", "", "P -4 2n"),
    sg!(115, 115, "P -4 m 2", "", "P -4 -2"),
    sg!(116, 116, "P -4 c 2", "", "P -4 -2c"),
    sg!(117, 117, "P -4 b 2", "", "P -4 -2ab"),
    sg!(118, 118, "P -4 n 2", "", "P -4 -2n"),
    sg!(119, 119, "I -4 m 2", "", "I -4 -2"),
    sg!(120, 120, "I -4 c 2", "", "I -4 -2c"),
    sg!(121, 121, "I -4 2 m", "", "I -4 2"),
    sg!(122, 122, "I -4 2 d", "", "I -4 2bw"),
    sg!(123, 123, "P 4/m m m", "", "-P 4 2"),
    sg!(124, 124, "P 4/m c c", "", "-P 4 2c"),
    sg!(125, 125, "P 4/n b m", "1", "P 4 2 -1ab"),
    sg!(125, 0, "P 4/n b m", "2", "-P 4a 2b"),
    sg!(126, 126, "P 4/n n c", "1", "P 4 2 -1n"),
    sg!(126, 0, "P 4/n n c", "2", "-P 4a 2bc"),
    sg!(127, 127, "P 4/m b m", "", "-P 4 2ab"),
    sg!(128, 128, "P 4/m n c", "", "-P 4 2n"),
    sg!(129, 129, "P 4/n m m", "1", "P 4ab 2ab -1ab"),
    sg!(129, 0, "P 4/n m m", "2", "-P 4a 2a"),
    sg!(130, 130, "P 4/n c c", "1", "P 4ab 2n -1ab"),
    sg!(130, 0, "P 4/n c c", "2", "-P 4a 2ac"),
    sg!(131, 131, "P 42/m m c", "", "-P 4c 2"),
    sg!(132, 132, "P 42/m c m", "", "-P 4c 2c"),
    sg!(133, 133, "P 42/n b c", "1", "P 4n 2c -1n"),
    sg!(133, 0, "P 42/n b c", "2", "-P 4ac 2b"),
    sg!(134, 134, "P 42/n n m", "1", "P 4n 2 -1n"),
    sg!(134, 0, "P 42/n n m", "2", "-P 4ac 2bc"),
    sg!(135, 135, "P 42/m b c", "", "-P 4c 2ab"),
    sg!(136, 136, "P 42/m n m", "", "-P 4n 2n"),
    sg!(137, 137, "P 42/n m c", "1", "P 4n 2n -1n"),
    sg!(137, 0, "P 42/n m c", "2", "-P 4ac 2a"),
    sg!(138, 138, "P 42/n c m", "1", "P 4n 2ab -1n"),
    sg!(138, 0, "P 42/n c m", "2", "-P 4ac 2ac"),
    sg!(139, 139, "I 4/m m m", "", "-I 4 2"),
    sg!(140, 140, "I 4/m c m", "", "-I 4 2c"),
    sg!(141, 141, "I 41/a m d", "1", "I 4bw 2bw -1bw"),
    sg!(141, 0, "I 41/a m d", "2", "-I 4bd 2"),
    sg!(142, 142, "I 41/a c d", "1", "I 4bw 2aw -1bw"),
    sg!(142, 0, "I 41/a c d", "2", "-I 4bd 2c"),
    // Trigonal
    sg!(143, 143, "P 3", "", "P 3"),
    sg!(144, 144, "P 31", "", "P 31"),
    sg!(145, 145, "P 32", "", "P 32"),
    sg!(146, 146, "R 3", "H", "R 3"),
    sg!(146, 1146, "R 3", "R", "P 3*"),
    sg!(147, 147, "P -3", "", "-P 3"),
    sg!(148, 148, "R -3", "H", "-R 3"),
    sg!(148, 1148, "R -3", "R", "-P 3*"),
    sg!(149, 149, "P 3 1 2", "", "P 3 2"),
    sg!(150, 150, "P 3 2 1", "", "P 3 2\""),
    sg!(151, 151, "P 31 1 2", "", "P 31 2 (0 0 4)"),
    sg!(152, 152, "P 31 2 1", "", "P 31 2\""),
    sg!(153, 153, "P 32 1 2", "", "P 32 2 (0 0 2)"),
    sg!(154, 154, "P 32 2 1", "", "P 32 2\""),
    sg!(155, 155, "R 3 2", "H", "R 3 2\""),
    sg!(155, 1155, "R 3 2", "R", "P 3* 2"),
    sg!(156, 156, "P 3 m 1", "", "P 3 -2\""),
    sg!(157, 157, "P 3 1 m", "", "P 3 -2"),
    sg!(158, 158, "P 3 c 1", "", "P 3 -2\"c"),
    sg!(159, 159, "P 3 1 c", "", "P 3 -2c"),
    sg!(160, 160, "R 3 m", "H", "R 3 -2\""),
    sg!(160, 1160, "R 3 m", "R", "P 3* -2"),
    sg!(161, 161, "R 3 c", "H", "R 3 -2\"c"),
    sg!(161, 1161, "R 3 c", "R", "P 3* -2n"),
    sg!(162, 162, "P -3 1 m", "", "-P 3 2"),
    sg!(163, 163, "P -3 1 c", "", "-P 3 2c"),
    sg!(164, 164, "P -3 m 1", "", "-P 3 2\""),
    sg!(165, 165, "P -3 c 1", "", "-P 3 2\"c"),
    sg!(166, 166, "R -3 m", "H", "-R 3 2\""),
    sg!(166, 1166, "R -3 m", "R", "-P 3* 2"),
    sg!(167, 167, "R -3 c", "H", "-R 3 2\"c"),
    sg!(167, 1167, "R -3 c", "R", "-P 3* 2n"),
    // Hexagonal
    sg!(168, 168, "P 6", "", "P 6"),
    sg!(169, 169, "P 61", "", "P 61"),
    sg!(170, 170, "P 65", "", "P 65"),
    sg!(171, 171, "P 62", "", "P 62"),
    sg!(172, 172, "P 64", "", "P 64"),
    sg!(173, 173, "P 63", "", "P 6c"),
    sg!(174, 174, "P -6", "", "P -6"),
    sg!(175, 175, "P 6/m", "", "-P 6"),
    sg!(176, 176, "P 63/m", "", "-P 6c"),
    sg!(177, 177, "P 6 2 2", "", "P 6 2"),
    sg!(178, 178, "P 61 2 2", "", "P 61 2 (0 0 -1)"),
    sg!(179, 179, "P 65 2 2", "", "P 65 2 (0 0 1)"),
    sg!(180, 180, "P 62 2 2", "", "P 62 2c (0 0 1)"),
    sg!(181, 181, "P 64 2 2", "", "P 64 2c (0 0 -1)"),
    sg!(182, 182, "P 63 2 2", "", "P 6c 2c"),
    sg!(183, 183, "P 6 m m", "", "P 6 -2"),
    sg!(184, 184, "P 6 c c", "", "P 6 -2c"),
    sg!(185, 185, "P 63 c m", "", "P 6c -2"),
    sg!(186, 186, "P 63 m c", "", "P 6c -2c"),
    sg!(187, 187, "P -6 m 2", "", "P -6 2"),
    sg!(188, 188, "P -6 c 2", "", "P -6c 2"),
    sg!(189, 189, "P -6 2 m", "", "P -6 -2"),
    sg!(190, 190, "P -6 2 c", "", "P -6c -2c"),
    sg!(191, 191, "P 6/m m m", "", "-P 6 2"),
    sg!(192, 192, "P 6/m c c", "", "-P 6 2c"),
    sg!(193, 193, "P 63/m c m", "", "-P 6c 2"),
    sg!(194, 194, "P 63/m m c", "", "-P 6c 2c"),
    // Cubic
    sg!(195, 195, "P 2 3", "", "P 2 2 3"),
    sg!(196, 196, "F 2 3", "", "F 2 2 3"),
    sg!(197, 197, "I 2 3", "", "I 2 2 3"),
    sg!(198, 198, "P 21 3", "", "P 2ac 2ab 3"),
    sg!(199, 199, "I 21 3", "", "I 2b 2c 3"),
    sg!(200, 200, "P m -3", "", "-P 2 2 3"),
    sg!(201, 201, "P n -3", "1", "P 2 2 3 -1n"),
    sg!(201, 0, "P n -3", "2", "-P 2ab 2bc 3"),
    sg!(202, 202, "F m -3", "", "-F 2 2 3"),
    sg!(203, 203, "F d -3", "1", "F 2 2 3 -1d"),
    sg!(203, 0, "F d -3", "2", "-F 2uv 2vw 3"),
    sg!(204, 204, "I m -3", "", "-I 2 2 3"),
    sg!(205, 205, "P a -3", "", "-P 2ac 2ab 3"),
    sg!(206, 206, "I a -3", "", "-I 2b 2c 3"),
    sg!(207, 207, "P 4 3 2", "", "P 4 2 3"),
    sg!(208, 208, "P 42 3 2", "", "P 4n 2 3"),
    sg!(209, 209, "F 4 3 2", "", "F 4 2 3"),
    sg!(210, 210, "F 41 3 2", "", "F 4d 2 3"),
    sg!(211, 211, "I 4 3 2", "", "I 4 2 3"),
    sg!(212, 212, "P 43 3 2", "", "P 4acd 2ab 3"),
    sg!(213, 213, "P 41 3 2", "", "P 4bd 2ab 3"),
    sg!(214, 214, "I 41 3 2", "", "I 4bd 2c 3"),
    sg!(215, 215, "P -4 3 m", "", "P -4 2 3"),
    sg!(216, 216, "F -4 3 m", "", "F -4 2 3"),
    sg!(217, 217, "I -4 3 m", "", "I -4 2 3"),
    sg!(218, 218, "P -4 3 n", "", "P -4n 2 3"),
    sg!(219, 219, "F -4 3 c", "", "F -4c 2 3"),
    sg!(220, 220, "I -4 3 d", "", "I -4bd 2c 3"),
    sg!(221, 221, "P m -3 m", "", "-P 4 2 3"),
    sg!(222, 222, "P n -3 n", "1", "P 4 2 3 -1n"),
    sg!(222, 0, "P n -3 n", "2", "-P 4a 2bc 3"),
    sg!(223, 223, "P m -3 n", "", "-P 4n 2 3"),
    sg!(224, 224, "P n -3 m", "1", "P 4n 2 3 -1n"),
    sg!(224, 0, "P n -3 m", "2", "-P 4bc 2bc 3"),
    sg!(225, 225, "F m -3 m", "", "-F 4 2 3"),
    sg!(226, 226, "F m -3 c", "", "-F 4c 2 3"),
    sg!(227, 227, "F d -3 m", "1", "F 4d 2 3 -1d"),
    sg!(227, 0, "F d -3 m", "2", "-F 4vw 2vw 3"),
    sg!(228, 228, "F d -3 c", "1", "F 4d 2 3 -1ad"),
    sg!(228, 0, "F d -3 c", "2", "-F 4ud 2vw 3"),
    sg!(229, 229, "I m -3 m", "", "-I 4 2 3"),
    sg!(230, 230, "I a -3 d", "", "-I 4bd 2c 3"),
];
